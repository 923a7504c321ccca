use common::utils::json::null_as_default;
use serde::{Deserialize, Serialize};

/// Create/update payload. A missing or null year is 0 and fails the minimum-year check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
}

/// Optional listing filters; empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}
