use std::fmt;

use common::utils::json::null_as_default;
use serde::{Deserialize, Serialize};

/// Login input. Missing or null fields arrive as empty strings and simply fail to match.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput").field("email", &self.email).field("password", &"<redacted>").finish()
    }
}

/// Successful login body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutput {
    pub email: String,
    pub profile: String,
    pub token: String,
}
