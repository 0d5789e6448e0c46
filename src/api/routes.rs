//! HTTP API route definitions.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{
    create_item, get_item, health, info, list_items, metrics_snapshot, welcome, AppState,
};
use crate::openapi::ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome + operational endpoints
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/metrics", get(metrics_snapshot))
        // Item collection
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/:id", get(get_item))
        // Process info
        .route("/api/info", get(info))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_spec))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the generated OpenAPI document.
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
