use async_trait::async_trait;
use models::administrator;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::{info, instrument, warn};

use super::domain::AdministratorInput;
use crate::auth::domain::LoginInput;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Administrator business operations. Inputs to `create`/`update` are expected
/// to have passed `validation::validate_administrator`.
#[async_trait]
pub trait AdministratorService: Send + Sync {
    /// First administrator (lowest id) whose email matches exactly and whose
    /// stored hash verifies against the given password.
    async fn login(&self, input: &LoginInput) -> Result<Option<administrator::Model>, ServiceError>;
    async fn list(&self, page: Pagination) -> Result<Vec<administrator::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<administrator::Model>, ServiceError>;
    async fn create(&self, input: AdministratorInput) -> Result<administrator::Model, ServiceError>;
    async fn update(&self, existing: administrator::Model, input: AdministratorInput) -> Result<administrator::Model, ServiceError>;
    async fn delete(&self, existing: administrator::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed implementation.
#[derive(Clone)]
pub struct SeaOrmAdministratorService {
    pub db: DatabaseConnection,
}

impl SeaOrmAdministratorService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl AdministratorService for SeaOrmAdministratorService {
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: &LoginInput) -> Result<Option<administrator::Model>, ServiceError> {
        let candidates = administrator::find_by_email(&self.db, &input.email).await?;
        for candidate in candidates {
            match common::crypto::verify_password(&input.password, &candidate.password) {
                Ok(true) => {
                    info!(admin_id = candidate.id, "administrator_logged_in");
                    return Ok(Some(candidate));
                }
                Ok(false) => {}
                Err(e) => warn!(admin_id = candidate.id, err = %e, "stored password hash unreadable; skipping"),
            }
        }
        Ok(None)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<administrator::Model>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        // fetch_page is 0-based
        let rows = administrator::Entity::find()
            .order_by_asc(administrator::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<administrator::Model>, ServiceError> {
        Ok(administrator::Entity::find_by_id(id).one(&self.db).await?)
    }

    #[instrument(skip(self, input), fields(email = %input.email, profile = %input.profile))]
    async fn create(&self, input: AdministratorInput) -> Result<administrator::Model, ServiceError> {
        let hash = common::crypto::hash_password(&input.password).map_err(crate::auth::errors::AuthError::from)?;
        let created = administrator::create(&self.db, &input.email, &hash, &input.profile).await?;
        info!(admin_id = created.id, "administrator_created");
        Ok(created)
    }

    #[instrument(skip(self, existing, input), fields(admin_id = existing.id))]
    async fn update(&self, existing: administrator::Model, input: AdministratorInput) -> Result<administrator::Model, ServiceError> {
        let hash = common::crypto::hash_password(&input.password).map_err(crate::auth::errors::AuthError::from)?;
        let changed = administrator::Model {
            id: existing.id,
            email: input.email,
            password: hash,
            profile: input.profile,
        };
        let updated = administrator::update(&self.db, changed).await?;
        info!("administrator_updated");
        Ok(updated)
    }

    #[instrument(skip(self, existing), fields(admin_id = existing.id))]
    async fn delete(&self, existing: administrator::Model) -> Result<(), ServiceError> {
        if !administrator::delete(&self.db, existing.id).await? {
            return Err(ServiceError::not_found("administrator"));
        }
        info!("administrator_deleted");
        Ok(())
    }
}
