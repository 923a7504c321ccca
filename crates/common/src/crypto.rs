//! Password hashing helpers shared by the seed migration and the service layer.
//!
//! Hashes are Argon2id PHC strings; the salt and parameters travel inside the string.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("malformed password hash: {0}")]
    Malformed(String),
}

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Check `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparsable stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, CryptoError> {
    let parsed = PasswordHash::new(stored).map_err(|e| CryptoError::Malformed(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
