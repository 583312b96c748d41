//! Response construction.
//!
//! # Responsibilities
//! - Build the synthesized text and HTML responses
//! - Wrap an upstream body as a streamed PDF response
//!
//! # Design Decisions
//! - Streaming responses avoid buffering the entire body
//! - Upstream headers are not relayed; the PDF response carries its own
//! - A body error mid-stream aborts the client connection, there is no
//!   way to change the already-sent status

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;

use crate::http::request::PaperId;
use crate::upstream::error_chain;

const TEXT_PLAIN: &str = "text/plain";
const TEXT_HTML: &str = "text/html";
const APPLICATION_PDF: &str = "application/pdf";

/// Plain-text response.
pub fn text(status: StatusCode, body: impl Into<String>) -> Response {
    let body: String = body.into();
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

/// HTML response with status 200.
pub fn html(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_HTML)], body).into_response()
}

/// `inline; filename="{id}.pdf"`, or `None` if the id cannot appear in a header.
pub fn content_disposition(id: &PaperId) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!("inline; filename=\"{id}.pdf\"")).ok()
}

/// Relay an upstream body to the client as it arrives.
pub fn pdf_stream(
    upstream: reqwest::Response,
    disposition: HeaderValue,
    request_id: String,
) -> Response {
    let stream = upstream.bytes_stream().inspect_err(move |e| {
        tracing::error!(
            request_id = %request_id,
            error = %error_chain(e),
            "Upstream body failed mid-stream"
        );
    });

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PDF)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(stream),
    )
        .into_response()
}
