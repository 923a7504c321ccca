//! Auth module: login payloads, errors and the bearer-token issuer.

pub mod domain;
pub mod errors;
pub mod token;

pub use token::{Claims, TokenIssuer};
