//! Upstream error definitions.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors raised while talking to the origin.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The reqwest client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured User-Agent is not a legal header value.
    #[error("invalid user agent: {0}")]
    UserAgent(#[from] InvalidHeaderValue),

    /// DNS, connect, TLS or protocol failure before a response arrived.
    #[error("{}", error_chain(.0))]
    Transport(reqwest::Error),
}

/// Render an error followed by its distinct sources, joined with ": ".
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("outer failure")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error_chain(&err), "outer failure: connection refused");
    }

    #[test]
    fn test_error_chain_skips_repeated_text() {
        #[derive(Debug, Error)]
        #[error("read failed: connection reset")]
        struct Repeating(#[source] std::io::Error);

        let err = Repeating(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        assert_eq!(error_chain(&err), "read failed: connection reset");
    }
}
