//! End-to-end tests for the item service HTTP surface.
//!
//! The router is exercised in-process (no listening socket), the same way
//! the service runs in test mode.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tower::ServiceExt;

use item_service::api::{create_router, AppState};
use item_service::config::Config;
use item_service::metrics;
use item_service::store::Item;

/// The recorder can only be installed once per process; every test shares
/// this handle while building its own independent state.
static METRICS: Lazy<PrometheusHandle> = Lazy::new(|| {
    let handle = metrics::install().expect("recorder installs once per process");
    metrics::init_metrics("1.0.0");
    handle
});

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        ..Config::default()
    }
}

fn test_app() -> Router {
    create_router(AppState::new(&test_config(), METRICS.clone()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_fetch_and_miss_scenario() {
    let app = test_app();

    // Create the first item.
    let (status, created) = send(&app, post_json("/api/items", json!({"name": "Widget"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "name": "Widget"}));

    // Fetch it back.
    let (status, fetched) = send(&app, get_request("/api/items/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // An ID that was never assigned is a clean 404.
    let (status, body) = send(&app, get_request("/api/items/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Item not found"}));
}

#[tokio::test]
async fn rejected_create_leaves_the_store_empty() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/api/items", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name is required"}));

    let (status, items) = send(&app, get_request("/api/items")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn descriptions_survive_the_roundtrip() {
    let app = test_app();

    let (_, with_description) = send(
        &app,
        post_json(
            "/api/items",
            json!({"name": "Widget", "description": "a widget"}),
        ),
    )
    .await;
    let (_, with_empty) = send(
        &app,
        post_json("/api/items", json!({"name": "Gadget", "description": ""})),
    )
    .await;
    let (_, without) = send(&app, post_json("/api/items", json!({"name": "Gizmo"}))).await;

    let item: Item = serde_json::from_value(with_description).unwrap();
    assert_eq!(item.description.as_deref(), Some("a widget"));

    // Explicit empty string and absent description stay distinct.
    let item: Item = serde_json::from_value(with_empty).unwrap();
    assert_eq!(item.description.as_deref(), Some(""));

    assert!(without.get("description").is_none());
}

#[tokio::test]
async fn info_counter_is_reported_by_health() {
    let app = test_app();

    let (_, before) = send(&app, get_request("/health")).await;
    assert_eq!(before["requestNumber"], 0);

    for expected in 1..=3u64 {
        let (status, info) = send(&app, get_request("/api/info")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(info["app"], "item-service");
        assert_eq!(info["platform"], std::env::consts::OS);

        let (_, health) = send(&app, get_request("/health")).await;
        assert_eq!(health["requestNumber"], expected);
    }
}

#[tokio::test]
async fn metrics_exposes_the_documented_series_as_plain_text() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get_request("/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    for name in ["http_requests_total", "app_info", "process_uptime_seconds"] {
        let samples: Vec<&str> = text.lines().filter(|l| l.starts_with(name)).collect();
        assert_eq!(samples.len(), 1, "expected one sample for {name}");

        let value: f64 = samples[0].rsplit(' ').next().unwrap().parse().unwrap();
        assert!(value >= 0.0, "{name} must be non-negative");
    }
}

#[tokio::test]
async fn independent_states_do_not_share_items_or_counters() {
    let first = test_app();
    let second = test_app();

    send(&first, post_json("/api/items", json!({"name": "Widget"}))).await;
    send(&first, get_request("/api/info")).await;

    let (_, items) = send(&second, get_request("/api/items")).await;
    assert_eq!(items, json!([]));

    let (_, health) = send(&second, get_request("/health")).await;
    assert_eq!(health["requestNumber"], 0);
}
