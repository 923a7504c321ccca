//! Migrator registering the vehicles API schema in dependency order.
//! The bootstrap administrator seed runs after both tables exist.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_administrator;
mod m20240601_000002_create_vehicle;
mod m20240601_000003_seed_administrator;

pub use m20240601_000003_seed_administrator::{BOOTSTRAP_EMAIL, BOOTSTRAP_PASSWORD, BOOTSTRAP_PROFILE};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_administrator::Migration),
            Box::new(m20240601_000002_create_vehicle::Migration),
            // Seed must follow table creation
            Box::new(m20240601_000003_seed_administrator::Migration),
        ]
    }
}
