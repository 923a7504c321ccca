use serde::{Deserialize, Serialize};

/// Payload served by the public `GET /` route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Home {
    pub message: String,
    pub doc: String,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            message: "Welcome to the vehicles API - Minimal API".to_string(),
            doc: "/docs".to_string(),
        }
    }
}
