//! Vehicle records: payloads and the persistence-backed service.

pub mod domain;
pub mod service;

pub use service::{SeaOrmVehicleService, VehicleService};
