use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};
use models::Profile;
use sea_orm::DatabaseConnection;
use service::{
    administrator::{AdministratorService, SeaOrmAdministratorService},
    auth::{
        domain::{LoginInput, LoginOutput},
        TokenIssuer,
    },
    vehicle::{SeaOrmVehicleService, VehicleService},
};
use tracing::warn;

use crate::errors::ApiError;

/// Profiles allowed to manage administrators and to modify or remove vehicles.
pub const ADM_ONLY: &[Profile] = &[Profile::Adm];
/// Profiles allowed to register, list and read vehicles.
pub const ANY_PROFILE: &[Profile] = &Profile::ALL;

#[derive(Clone)]
pub struct ServerState {
    pub administrators: Arc<dyn AdministratorService>,
    pub vehicles: Arc<dyn VehicleService>,
    pub tokens: Arc<TokenIssuer>,
}

impl ServerState {
    /// Wire the SeaORM-backed services over one pooled connection.
    pub fn new(db: DatabaseConnection, tokens: TokenIssuer) -> Self {
        Self {
            administrators: Arc::new(SeaOrmAdministratorService::new(db.clone())),
            vehicles: Arc::new(SeaOrmVehicleService::new(db)),
            tokens: Arc::new(tokens),
        }
    }
}

#[utoipa::path(
    post, path = "/administrators/login", tag = "administrators",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::LoginResponse),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(State(state): State<ServerState>, Json(input): Json<LoginInput>) -> Result<Json<LoginOutput>, ApiError> {
    let Some(admin) = state.administrators.login(&input).await? else {
        warn!(email = %input.email, "login rejected");
        return Err(ApiError::Unauthorized);
    };
    let token = state.tokens.issue(&admin)?;
    Ok(Json(LoginOutput { email: admin.email, profile: admin.profile, token }))
}

/// Require `Authorization: Bearer <token>`; valid claims are handed to handlers
/// through request extensions. Anything else is a 401.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let Some(token) = token else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(ApiError::Unauthorized);
    };

    match state.tokens.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, err = %e, "token validation failed");
            Err(ApiError::Unauthorized)
        }
    }
}
