use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use common::types::Home;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

pub mod administrators;
pub mod auth;
pub mod vehicles;

pub use auth::ServerState;

#[utoipa::path(get, path = "/", tag = "home", responses((status = 200, description = "OK", body = crate::openapi::HomeResponse)))]
pub async fn home() -> Json<Home> {
    Json(Home::default())
}

/// Build the full application router: public home/login/docs plus the bearer-protected CRUD routes
pub fn build_router(state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(home))
        .route("/administrators/login", post(auth::login));

    let protected = Router::new()
        .route("/administrators", post(administrators::create).get(administrators::list))
        .route(
            "/administrators/:id",
            get(administrators::get).put(administrators::update).delete(administrators::delete),
        )
        .route("/vehicles", post(vehicles::create).get(vehicles::list))
        .route(
            "/vehicles/:id",
            get(vehicles::get).put(vehicles::update).delete(vehicles::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
