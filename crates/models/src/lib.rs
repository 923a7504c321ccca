//! Persistence gateway: SeaORM entities and CRUD primitives for the
//! `administrator` and `vehicle` tables.

pub mod errors;
pub mod db;
pub mod administrator;
pub mod vehicle;

pub use administrator::Profile;

#[cfg(test)]
mod tests;
