//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cachexiv_requests_total` (counter): requests by route, status
//! - `cachexiv_request_duration_seconds` (histogram): time to response head, by route
//! - `cachexiv_upstream_latency_seconds` (histogram): `/ping` probe results
//!
//! Streamed download bodies are not included in the request duration.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "cachexiv_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("cachexiv_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a successful origin probe.
pub fn record_upstream_latency(elapsed: Duration) {
    metrics::histogram!("cachexiv_upstream_latency_seconds").record(elapsed.as_secs_f64());
}
