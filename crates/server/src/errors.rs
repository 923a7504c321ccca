use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::{auth::errors::AuthError, errors::ServiceError, validation::ValidationErrors};
use thiserror::Error;
use tracing::error;

/// Handler-level failure, mapped onto a status code and JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrors { messages })).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                let body = serde_json::json!({"error": "internal server error"});
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized | AuthError::TokenError(_) => ApiError::Unauthorized,
            AuthError::Forbidden => ApiError::Forbidden,
            AuthError::MissingKey | AuthError::HashError(_) => ApiError::Internal(format!("[{}] {}", e.code(), e)),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(messages) => ApiError::Validation(messages),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Auth(a) => a.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation(vec!["x".into()]), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("vehicle"), StatusCode::NOT_FOUND),
            (ServiceError::Auth(AuthError::Forbidden), StatusCode::FORBIDDEN),
            (ServiceError::Auth(AuthError::TokenError("bad".into())), StatusCode::UNAUTHORIZED),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn missing_key_is_a_server_fault() {
        let resp = ApiError::from(AuthError::MissingKey).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
