use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use service::{
    administrator::domain::{AdministratorInput, AdministratorView},
    auth::Claims,
    pagination::Pagination,
    validation::validate_administrator,
};

use crate::errors::ApiError;
use crate::routes::auth::{ServerState, ADM_ONLY};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, 10 rows per page
    pub page: Option<u32>,
}

#[utoipa::path(
    post, path = "/administrators", tag = "administrators",
    request_body = crate::openapi::AdministratorRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AdministratorDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<AdministratorInput>,
) -> Result<Response, ApiError> {
    claims.require_any(ADM_ONLY)?;
    validate_administrator(&input).into_result()?;
    let created = state.administrators.create(input).await?;
    let location = format!("/administrators/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(AdministratorView::from(created))).into_response())
}

#[utoipa::path(
    get, path = "/administrators", tag = "administrators",
    params(PageQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::AdministratorDoc]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer" = []))
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Vec<AdministratorView>>, ApiError> {
    claims.require_any(ADM_ONLY)?;
    let rows = state.administrators.list(Pagination::page(q.page)).await?;
    Ok(Json(rows.into_iter().map(AdministratorView::from).collect()))
}

#[utoipa::path(
    get, path = "/administrators/{id}", tag = "administrators",
    params(("id" = i32, Path, description = "Administrator id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AdministratorDoc),
        (status = 404, description = "Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<AdministratorView>, ApiError> {
    claims.require_any(ADM_ONLY)?;
    let admin = state.administrators.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(admin.into()))
}

#[utoipa::path(
    put, path = "/administrators/{id}", tag = "administrators",
    params(("id" = i32, Path, description = "Administrator id")),
    request_body = crate::openapi::AdministratorRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AdministratorDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 404, description = "Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(input): Json<AdministratorInput>,
) -> Result<Json<AdministratorView>, ApiError> {
    claims.require_any(ADM_ONLY)?;
    let existing = state.administrators.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    validate_administrator(&input).into_result()?;
    let updated = state.administrators.update(existing, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/administrators/{id}", tag = "administrators",
    params(("id" = i32, Path, description = "Administrator id")),
    responses(
        (status = 204, description = "Deleted"),
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
    let existing = state.administrators.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    state.administrators.delete(existing).await?;
    Ok(StatusCode::NO_CONTENT)
}
