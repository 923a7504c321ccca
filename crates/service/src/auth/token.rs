use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use models::{administrator, Profile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::errors::AuthError;

/// Claims carried by every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub profile: String,
    pub exp: usize,
}

impl Claims {
    pub fn profile(&self) -> Option<Profile> { self.profile.parse().ok() }

    /// `Forbidden` unless the token's profile is one of `allowed`.
    pub fn require_any(&self, allowed: &[Profile]) -> Result<(), AuthError> {
        match self.profile() {
            Some(p) if allowed.contains(&p) => Ok(()),
            _ => Err(AuthError::Forbidden),
        }
    }
}

/// HS256 token issuer and verifier over a symmetric key.
///
/// Construction fails without a key; there is no built-in fallback.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, AuthError> {
        if secret.trim().is_empty() {
            return Err(AuthError::MissingKey);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    pub fn from_config(cfg: &configs::AuthConfig) -> Result<Self, AuthError> {
        let secret = cfg.jwt_secret.as_deref().ok_or(AuthError::MissingKey)?;
        let hours = cfg.token_ttl_hours;
        if hours == 0 || hours > configs::MAX_TOKEN_TTL_HOURS {
            return Err(AuthError::TokenError(format!("token ttl of {hours}h is out of range")));
        }
        Self::new(secret, Duration::hours(hours as i64))
    }

    /// Sign a token for `admin` expiring `ttl` from now.
    #[instrument(skip(self, admin), fields(admin_id = admin.id))]
    pub fn issue(&self, admin: &administrator::Model) -> Result<String, AuthError> {
        let exp = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::TokenError("token expiry out of range".into()))?
            .timestamp()
            .max(0) as usize;
        let claims = Claims { email: admin.email.clone(), profile: admin.profile.clone(), exp };
        let token = encode(&JwtHeader::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        debug!(exp, "token issued");
        Ok(token)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(data.claims)
    }
}
