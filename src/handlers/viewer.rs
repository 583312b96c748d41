//! `/viewer`: HTML page embedding a third-party document viewer that loads
//! the PDF back through this service's `/download` route.
//!
//! No upstream call is made here. With `escape_id` enabled the id is
//! percent-encoded into the nested URLs and the page is HTML-escaped;
//! otherwise the id is interpolated verbatim.

use axum::{
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use thiserror::Error;
use url::form_urlencoded;

use crate::config::ViewerConfig;
use crate::http::request::{public_origin, PaperId};
use crate::http::response::{html, text};

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Missing id parameter")]
    MissingId,

    /// No `public_url` configured and the request carried no host.
    #[error("Missing Host header")]
    MissingHost,
}

impl IntoResponse for ViewerError {
    fn into_response(self) -> Response {
        text(StatusCode::BAD_REQUEST, self.to_string())
    }
}

pub fn viewer(config: &ViewerConfig, parts: &Parts) -> Response {
    match page(config, parts) {
        Ok(body) => html(body),
        Err(e) => e.into_response(),
    }
}

fn page(config: &ViewerConfig, parts: &Parts) -> Result<String, ViewerError> {
    let id = PaperId::from_query(parts.uri.query()).ok_or(ViewerError::MissingId)?;
    let origin = match &config.public_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => public_origin(parts).ok_or(ViewerError::MissingHost)?,
    };
    Ok(render(config, &origin, &id))
}

/// Viewer `src` URL pointing back at `{origin}/download?id={id}`.
pub fn viewer_src(config: &ViewerConfig, origin: &str, id: &PaperId) -> String {
    if config.escape_id {
        let download = format!("{origin}/download?id={}", encode(id.as_str()));
        format!("{}?url={}&embedded=true", config.base_url, encode(&download))
    } else {
        format!(
            "{}?url={origin}/download?id={id}&embedded=true",
            config.base_url
        )
    }
}

fn render(config: &ViewerConfig, origin: &str, id: &PaperId) -> String {
    let src = viewer_src(config, origin, id);
    let (title, src) = if config.escape_id {
        (
            encode_text(id.as_str()).into_owned(),
            encode_double_quoted_attribute(&src).into_owned(),
        )
    } else {
        (id.to_string(), src)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - cacheXiv</title>
<style>html, body, iframe {{ margin: 0; width: 100%; height: 100%; border: 0; }}</style>
</head>
<body>
<iframe src="{src}" frameborder="0" allowfullscreen></iframe>
</body>
</html>
"#
    )
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(escape_id: bool) -> ViewerConfig {
        ViewerConfig {
            escape_id,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_src_escaped() {
        let src = viewer_src(
            &config(true),
            "https://cachexiv.example",
            &PaperId::new("hep-th/9901001"),
        );
        assert_eq!(
            src,
            "https://docs.google.com/gview?url=https%3A%2F%2Fcachexiv.example%2Fdownload%3Fid%3Dhep-th%252F9901001&embedded=true"
        );
    }

    #[test]
    fn test_src_verbatim() {
        let src = viewer_src(
            &config(false),
            "https://cachexiv.example",
            &PaperId::new("2101.00001"),
        );
        assert_eq!(
            src,
            "https://docs.google.com/gview?url=https://cachexiv.example/download?id=2101.00001&embedded=true"
        );
    }

    #[test]
    fn test_render_escapes_markup() {
        let body = render(
            &config(true),
            "https://cachexiv.example",
            &PaperId::new("\"><script>alert(1)</script>"),
        );
        assert!(!body.contains("<script>"));
        assert!(body.contains("<title>\"&gt;&lt;script&gt;alert(1)&lt;/script&gt; - cacheXiv</title>"));
        assert!(body.contains("&amp;embedded=true"));
    }

    #[test]
    fn test_render_verbatim_keeps_markup() {
        let body = render(
            &config(false),
            "https://cachexiv.example",
            &PaperId::new("<b>"),
        );
        assert!(body.contains("<title><b> - cacheXiv</title>"));
        assert!(body.contains("&embedded=true\""));
    }
}
