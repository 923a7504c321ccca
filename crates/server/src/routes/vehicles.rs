use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use models::vehicle;
use serde::Deserialize;
use service::{
    auth::Claims,
    pagination::Pagination,
    validation::validate_vehicle,
    vehicle::domain::{VehicleFilter, VehicleInput},
};

use crate::errors::ApiError;
use crate::routes::auth::{ServerState, ADM_ONLY, ANY_PROFILE};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number, 10 rows per page
    pub page: Option<u32>,
    /// Case-insensitive substring of the vehicle name
    pub name: Option<String>,
    /// Case-insensitive substring of the brand
    pub brand: Option<String>,
}

#[utoipa::path(
    post, path = "/vehicles", tag = "vehicles",
    request_body = crate::openapi::VehicleRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VehicleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<VehicleInput>,
) -> Result<Response, ApiError> {
    claims.require_any(ANY_PROFILE)?;
    validate_vehicle(&input).into_result()?;
    let created = state.vehicles.create(input).await?;
    let location = format!("/vehicles/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

#[utoipa::path(
    get, path = "/vehicles", tag = "vehicles",
    params(ListQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::VehicleDoc]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer" = []))
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<vehicle::Model>>, ApiError> {
    claims.require_any(ANY_PROFILE)?;
    let filter = VehicleFilter { name: q.name, brand: q.brand };
    let rows = state.vehicles.list(Pagination::page(q.page), &filter).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<vehicle::Model>, ApiError> {
    claims.require_any(ANY_PROFILE)?;
    let found = state.vehicles.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = crate::openapi::VehicleRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::VehicleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(input): Json<VehicleInput>,
) -> Result<Json<vehicle::Model>, ApiError> {
    claims.require_any(ADM_ONLY)?;
    let existing = state.vehicles.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    validate_vehicle(&input).into_result()?;
    let updated = state.vehicles.update(existing, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    claims.require_any(ADM_ONLY)?;
    let existing = state.vehicles.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    state.vehicles.delete(existing).await?;
    Ok(StatusCode::NO_CONTENT)
}
