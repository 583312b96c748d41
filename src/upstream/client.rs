//! Origin HTTP client.
//!
//! # Responsibilities
//! - Build upstream URLs from the configured origin
//! - Issue the PDF fetch with forwarded headers
//! - Measure round-trip latency to the origin root

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, HeaderValue};

use crate::config::UpstreamConfig;
use crate::http::request::PaperId;
use crate::upstream::error::UpstreamError;
use crate::upstream::headers::{forward_headers, probe_headers};

/// Client for the fixed upstream origin.
///
/// Cheap to clone: the reqwest client is reference counted internally.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    /// Origin without trailing slash.
    origin: Arc<str>,
    user_agent: HeaderValue,
}

impl UpstreamClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let user_agent = HeaderValue::from_str(&config.user_agent)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(UpstreamError::Client)?;

        let origin: Arc<str> = Arc::from(config.origin.trim_end_matches('/'));
        tracing::info!(origin = %origin, "Upstream client initialized");

        Ok(Self {
            http,
            origin,
            user_agent,
        })
    }

    /// `{origin}/pdf/{id}.pdf`, with the id interpolated verbatim.
    pub fn pdf_url(&self, id: &PaperId) -> String {
        format!("{}/pdf/{}.pdf", self.origin, id)
    }

    /// `{origin}/`
    pub fn probe_url(&self) -> String {
        format!("{}/", self.origin)
    }

    /// Fetch a paper PDF. Resolves once response headers arrive; the body is
    /// left unread for the caller to stream.
    pub async fn fetch_pdf(
        &self,
        id: &PaperId,
        inbound: &HeaderMap,
    ) -> Result<reqwest::Response, UpstreamError> {
        let url = self.pdf_url(id);
        tracing::debug!(url = %url, "Fetching PDF from origin");

        self.http
            .get(url)
            .headers(forward_headers(inbound, &self.user_agent))
            .send()
            .await
            .map_err(UpstreamError::Transport)
    }

    /// Time a GET to the origin root, up to receipt of response headers.
    pub async fn probe(&self) -> Result<Duration, UpstreamError> {
        let start = Instant::now();
        let response = self
            .http
            .get(self.probe_url())
            .headers(probe_headers(&self.user_agent))
            .send()
            .await
            .map_err(UpstreamError::Transport)?;
        let elapsed = start.elapsed();

        tracing::debug!(
            status = %response.status(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Origin probe completed"
        );

        Ok(elapsed)
    }
}
