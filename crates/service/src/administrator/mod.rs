//! Administrator accounts: payloads, view model and the persistence-backed service.

pub mod domain;
pub mod service;

pub use service::{AdministratorService, SeaOrmAdministratorService};
