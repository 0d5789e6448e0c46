//! Prometheus metrics for request accounting and process monitoring.
//!
//! The recorder is installed once at startup; the `/metrics` endpoint
//! renders its snapshot. All metrics are pre-registered so every
//! documented series is present from the very first scrape.

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Total HTTP request counter metric name.
pub const METRIC_HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
/// Application info gauge metric name.
pub const METRIC_APP_INFO: &str = "app_info";
/// Process uptime gauge metric name.
pub const METRIC_PROCESS_UPTIME_SECONDS: &str = "process_uptime_seconds";

/// Install the Prometheus recorder and return its render handle.
/// Call this once at startup, before [`init_metrics`].
pub fn install() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Register descriptions and pre-register all metrics at zero so each
/// series renders even before any traffic arrives.
pub fn init_metrics(version: &str) {
    describe_counter!(METRIC_HTTP_REQUESTS_TOTAL, "Total number of HTTP requests");
    describe_gauge!(METRIC_APP_INFO, "Application information");
    describe_gauge!(METRIC_PROCESS_UPTIME_SECONDS, "Process uptime in seconds");

    counter!(
        METRIC_HTTP_REQUESTS_TOTAL,
        "method" => "GET",
        "endpoint" => "/",
        "status" => "200"
    )
    .absolute(0);
    gauge!(METRIC_APP_INFO, "version" => version.to_string()).set(1.0);
    gauge!(METRIC_PROCESS_UPTIME_SECONDS).set(0.0);

    debug!("Metrics initialized");
}

/// Increment the HTTP request counter.
pub fn inc_http_requests() {
    counter!(
        METRIC_HTTP_REQUESTS_TOTAL,
        "method" => "GET",
        "endpoint" => "/",
        "status" => "200"
    )
    .increment(1);
}

/// Set the process uptime gauge. Called at scrape time.
pub fn set_process_uptime(seconds: f64) {
    gauge!(METRIC_PROCESS_UPTIME_SECONDS).set(seconds);
}

/// Shared recorder handle for tests. The recorder can only be installed
/// once per process, so all tests in a binary reuse the same handle.
#[cfg(test)]
pub(crate) fn test_handle() -> PrometheusHandle {
    use once_cell::sync::Lazy;

    static HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
        let handle = install().expect("recorder installs once per process");
        init_metrics("1.0.0");
        handle
    });

    HANDLE.clone()
}
