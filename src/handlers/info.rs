//! Root banner and fallback responses.

use axum::{http::StatusCode, response::Response};

use crate::http::response::text;

/// Body served on `/`.
pub const BANNER: &str = "cacheXiv: rapid arXiv paper serving system";

pub fn info() -> Response {
    text(StatusCode::OK, BANNER)
}

pub fn not_found() -> Response {
    text(StatusCode::NOT_FOUND, "Not Found")
}
