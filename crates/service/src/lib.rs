//! Service layer for the vehicles API.
//! - Business operations on administrators and vehicles behind async traits.
//! - Field validation and pagination shared by the HTTP handlers.
//! - Token issuing and verification for the bearer scheme.

pub mod errors;
pub mod pagination;
pub mod validation;
pub mod auth;
pub mod administrator;
pub mod vehicle;
#[cfg(test)]
pub mod test_support;
