//! HTTP API handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;
use utoipa::ToSchema;

use crate::config::Config;
use crate::error::ApiError;
use crate::metrics::{inc_http_requests, set_process_uptime};
use crate::store::{Item, ItemStore, NewItem};

/// Application name reported by `/api/info`.
pub const APP_NAME: &str = "item-service";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The item collection. Written only by the create handler.
    pub store: Arc<tokio::sync::RwLock<ItemStore>>,
    /// Info-request counter. Incremented only by `/api/info`; `/health`
    /// and `/metrics` report it without incrementing.
    pub request_count: Arc<AtomicU64>,
    /// Process start instant, source of the reported uptime.
    pub started_at: Instant,
    /// Reported application version.
    pub version: String,
    /// Deployment environment name.
    pub environment: String,
    /// Prometheus render handle for the `/metrics` snapshot.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state with an empty store and zeroed counters.
    pub fn new(config: &Config, metrics: PrometheusHandle) -> Self {
        Self {
            store: Arc::new(tokio::sync::RwLock::new(ItemStore::new())),
            request_count: Arc::new(AtomicU64::new(0)),
            started_at: Instant::now(),
            version: config.app_version.clone(),
            environment: config.environment.clone(),
            metrics,
        }
    }
}

/// Welcome response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Static welcome message.
    pub message: String,
    /// Application version.
    pub version: String,
    /// Deployment environment name.
    pub environment: String,
}

/// Liveness response for orchestration probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status literal, always `healthy` while the process runs.
    pub status: String,
    /// Current UTC timestamp, RFC 3339.
    pub timestamp: String,
    /// Application version.
    pub version: String,
    /// Current info-request count.
    #[serde(rename = "requestNumber")]
    pub request_number: u64,
}

/// Process info response.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    /// Application name.
    pub app: String,
    /// Application version.
    pub version: String,
    /// Rust toolchain the service declares.
    pub rust_version: String,
    /// Operating system identifier.
    pub platform: String,
    /// Seconds since process start.
    pub uptime: f64,
}

/// Item creation request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Display name. Required; rejected when missing or empty.
    pub name: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Welcome handler.
#[utoipa::path(
    get,
    path = "/",
    tag = "ops",
    responses((status = 200, description = "Welcome payload", body = WelcomeResponse))
)]
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to the {APP_NAME} API!"),
        version: state.version.clone(),
        environment: state.environment.clone(),
    })
}

/// Health check handler - always returns 200 while the process runs.
#[utoipa::path(
    get,
    path = "/health",
    tag = "ops",
    responses((status = 200, description = "Liveness payload", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(anyhow::Error::from)?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        request_number: state.request_count.load(Ordering::SeqCst),
    }))
}

/// Metrics snapshot handler - renders the Prometheus exposition text.
pub async fn metrics_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    set_process_uptime(state.started_at.elapsed().as_secs_f64());

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// List all items in insertion order.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses((status = 200, description = "All items in insertion order", body = [Item]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.store.read().await.list();
    Json(items)
}

/// Fetch a single item by ID.
///
/// An unparseable id can never match a stored integer id, so it is
/// reported as not-found rather than as a malformed request.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::item_not_found())?;

    let store = state.store.read().await;
    let item = store.get(id).cloned().ok_or_else(ApiError::item_not_found)?;

    Ok(Json(item))
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Name missing or empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item = NewItem {
        name: body.name.unwrap_or_default(),
        description: body.description,
    };

    let mut store = state.store.write().await;
    let item = store.create(new_item)?;

    debug!(id = item.id, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Process info handler. The only route that increments the request counter.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "ops",
    responses((status = 200, description = "Process info", body = InfoResponse))
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let count = state.request_count.fetch_add(1, Ordering::SeqCst) + 1;
    inc_http_requests();
    debug!(request_number = count, "served info request");

    Json(InfoResponse {
        app: APP_NAME.to_string(),
        version: state.version.clone(),
        rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
        platform: std::env::consts::OS.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
