//! Field checks for request DTOs.
//!
//! Every check runs; violations accumulate in a fixed order and an empty
//! list means the input is valid. "Blank" means the empty string.

use models::{vehicle::MIN_YEAR, Profile};
use serde::{Deserialize, Serialize};

use crate::administrator::domain::AdministratorInput;
use crate::errors::ServiceError;
use crate::vehicle::domain::VehicleInput;

pub const EMAIL_BLANK: &str = "Email must not be blank";
pub const PASSWORD_BLANK: &str = "Password must not be blank";
pub const PROFILE_BLANK: &str = "Profile must not be blank";
pub const PROFILE_INVALID: &str = "Profile must be Adm or Editor";
pub const NAME_BLANK: &str = "Name must not be blank";
pub const BRAND_BLANK: &str = "Brand must not be blank";
pub const VEHICLE_TOO_OLD: &str = "Vehicle too old, only vehicles from 1950 onwards are accepted";

/// Itemized validation failures, serialized as `{"messages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    fn push(&mut self, msg: &str) { self.messages.push(msg.to_string()); }

    pub fn is_empty(&self) -> bool { self.messages.is_empty() }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() { Ok(()) } else { Err(ServiceError::Validation(self.messages)) }
    }
}

/// Check an administrator payload.
///
/// # Examples
/// ```
/// use service::administrator::domain::AdministratorInput;
/// use service::validation::{validate_administrator, PROFILE_INVALID};
/// let input = AdministratorInput { email: "a@b.c".into(), password: "x".into(), profile: "Admin".into() };
/// assert_eq!(validate_administrator(&input).messages, vec![PROFILE_INVALID.to_string()]);
/// ```
pub fn validate_administrator(input: &AdministratorInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if input.email.is_empty() {
        errors.push(EMAIL_BLANK);
    }
    if input.password.is_empty() {
        errors.push(PASSWORD_BLANK);
    }
    if input.profile.is_empty() {
        errors.push(PROFILE_BLANK);
    } else if input.profile.parse::<Profile>().is_err() {
        errors.push(PROFILE_INVALID);
    }
    errors
}

pub fn validate_vehicle(input: &VehicleInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if input.name.is_empty() {
        errors.push(NAME_BLANK);
    }
    if input.brand.is_empty() {
        errors.push(BRAND_BLANK);
    }
    if input.year < MIN_YEAR {
        errors.push(VEHICLE_TOO_OLD);
    }
    errors
}
