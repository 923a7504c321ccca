use async_trait::async_trait;
use models::vehicle;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{info, instrument};

use super::domain::{VehicleFilter, VehicleInput};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait VehicleService: Send + Sync {
    async fn list(&self, page: Pagination, filter: &VehicleFilter) -> Result<Vec<vehicle::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<vehicle::Model>, ServiceError>;
    async fn create(&self, input: VehicleInput) -> Result<vehicle::Model, ServiceError>;
    async fn update(&self, existing: vehicle::Model, input: VehicleInput) -> Result<vehicle::Model, ServiceError>;
    async fn delete(&self, existing: vehicle::Model) -> Result<(), ServiceError>;
}

#[derive(Clone)]
pub struct SeaOrmVehicleService {
    pub db: DatabaseConnection,
}

impl SeaOrmVehicleService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl VehicleService for SeaOrmVehicleService {
    #[instrument(skip(self, page), fields(page = page.page))]
    async fn list(&self, page: Pagination, filter: &VehicleFilter) -> Result<Vec<vehicle::Model>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        let rows = vehicle::search(filter.name.as_deref(), filter.brand.as_deref())
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<vehicle::Model>, ServiceError> {
        Ok(vehicle::Entity::find_by_id(id).one(&self.db).await?)
    }

    #[instrument(skip(self))]
    async fn create(&self, input: VehicleInput) -> Result<vehicle::Model, ServiceError> {
        let created = vehicle::create(&self.db, &input.name, &input.brand, input.year).await?;
        info!(vehicle_id = created.id, "vehicle_created");
        Ok(created)
    }

    #[instrument(skip(self, existing), fields(vehicle_id = existing.id))]
    async fn update(&self, existing: vehicle::Model, input: VehicleInput) -> Result<vehicle::Model, ServiceError> {
        let changed = vehicle::Model { id: existing.id, name: input.name, brand: input.brand, year: input.year };
        let updated = vehicle::update(&self.db, changed).await?;
        info!("vehicle_updated");
        Ok(updated)
    }

    #[instrument(skip(self, existing), fields(vehicle_id = existing.id))]
    async fn delete(&self, existing: vehicle::Model) -> Result<(), ServiceError> {
        if !vehicle::delete(&self.db, existing.id).await? {
            return Err(ServiceError::not_found("vehicle"));
        }
        info!("vehicle_deleted");
        Ok(())
    }
}
