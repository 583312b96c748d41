//! `/download`: fetch a paper PDF from the origin and stream it back.

use axum::{
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::request::{request_id, PaperId};
use crate::http::response::{content_disposition, pdf_stream, text};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Terminal failures of a download. `Display` is the response body.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Missing id parameter")]
    MissingId,

    /// The id contains bytes that cannot go into `Content-Disposition`.
    #[error("Invalid id parameter")]
    InvalidId,

    #[error("PDF not found")]
    NotFound,

    /// Origin answered with a non-success status other than 404.
    #[error("Failed to fetch PDF: {0}")]
    UpstreamStatus(String),

    #[error("An error occurred while fetching the PDF: {0}")]
    Transport(#[from] UpstreamError),
}

impl DownloadError {
    pub fn status(&self) -> StatusCode {
        match self {
            DownloadError::MissingId | DownloadError::InvalidId => StatusCode::BAD_REQUEST,
            DownloadError::NotFound => StatusCode::NOT_FOUND,
            DownloadError::UpstreamStatus(_) | DownloadError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        text(self.status(), self.to_string())
    }
}

/// Handle a download request.
pub async fn download(upstream: &UpstreamClient, parts: &Parts) -> Response {
    match fetch(upstream, parts).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn fetch(upstream: &UpstreamClient, parts: &Parts) -> Result<Response, DownloadError> {
    let id = PaperId::from_query(parts.uri.query()).ok_or(DownloadError::MissingId)?;
    let disposition = content_disposition(&id).ok_or(DownloadError::InvalidId)?;
    let request_id = request_id(parts);

    let response = match upstream.fetch_pdf(&id, &parts.headers).await {
        Ok(response) => response,
        Err(e) => {
            let err = DownloadError::from(e);
            tracing::error!(request_id = %request_id, paper_id = %id, error = %err, "Upstream fetch failed");
            return Err(err);
        }
    };

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(request_id = %request_id, paper_id = %id, "PDF not found upstream");
        return Err(DownloadError::NotFound);
    }

    if !status.is_success() {
        let err = DownloadError::UpstreamStatus(status_text(status));
        tracing::error!(
            request_id = %request_id,
            paper_id = %id,
            status = %status,
            error = %err,
            "Upstream returned error status"
        );
        return Err(err);
    }

    tracing::debug!(request_id = %request_id, paper_id = %id, "Streaming PDF");
    Ok(pdf_stream(response, disposition, request_id.to_string()))
}

/// Reason phrase for a status, or its numeric code when none is registered.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), str::to_string)
}
