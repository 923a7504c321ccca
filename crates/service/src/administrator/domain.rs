use std::fmt;

use common::utils::json::null_as_default;
use models::administrator;
use serde::{Deserialize, Serialize};

/// Create/update payload. Missing or null fields become empty strings and are reported by validation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdministratorInput {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile: String,
}

impl fmt::Debug for AdministratorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdministratorInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

/// What clients see of an administrator; the password never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorView {
    pub id: i32,
    pub email: String,
    pub profile: String,
}

impl From<&administrator::Model> for AdministratorView {
    fn from(m: &administrator::Model) -> Self {
        Self { id: m.id, email: m.email.clone(), profile: m.profile.clone() }
    }
}

impl From<administrator::Model> for AdministratorView {
    fn from(m: administrator::Model) -> Self {
        Self { id: m.id, email: m.email, profile: m.profile }
    }
}
