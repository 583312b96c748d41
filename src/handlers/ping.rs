//! `/ping`: latency probe against the origin root.

use axum::{http::StatusCode, response::Response};

use crate::http::response::text;
use crate::observability::metrics;
use crate::upstream::UpstreamClient;

pub async fn ping(upstream: &UpstreamClient) -> Response {
    match upstream.probe().await {
        Ok(elapsed) => {
            metrics::record_upstream_latency(elapsed);
            text(
                StatusCode::OK,
                format!(
                    "Latency to {}: {} ms",
                    upstream.probe_url(),
                    elapsed.as_millis()
                ),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Origin probe failed");
            text(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}"))
        }
    }
}
