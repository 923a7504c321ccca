use thiserror::Error;

use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
