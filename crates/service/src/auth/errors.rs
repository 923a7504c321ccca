use thiserror::Error;

/// Business errors for login and bearer-token workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token signing key is not configured")]
    MissingKey,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("profile not allowed for this operation")]
    Forbidden,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::MissingKey => 1000,
            AuthError::Unauthorized => 1004,
            AuthError::Forbidden => 1005,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
        }
    }
}

impl From<common::CryptoError> for AuthError {
    fn from(e: common::CryptoError) -> Self { AuthError::HashError(e.to_string()) }
}
