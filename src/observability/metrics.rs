//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define relay metrics (requests, latency, upstream failures)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `relay_requests_total` (counter): by exchange kind, method, status
//! - `relay_request_duration_seconds` (histogram): latency distribution
//! - `relay_upstream_errors_total` (counter): failed backend round trips
//!
//! # Design Decisions
//! - Recording without an installed recorder is a no-op, so tests and
//!   deployments without the endpoint pay almost nothing

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished exchange.
pub fn record_exchange(kind: &'static str, method: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "relay_requests_total",
        "kind" => kind,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("relay_request_duration_seconds", "kind" => kind)
        .record(start.elapsed().as_secs_f64());
}

/// Record a backend round trip that ended in the 500 failure path.
pub fn record_upstream_error(method: &'static str) {
    ::metrics::counter!("relay_upstream_errors_total", "method" => method).increment(1);
}
