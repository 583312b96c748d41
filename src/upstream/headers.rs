//! Header manipulation for upstream requests.
//!
//! # Responsibilities
//! - Clone the client's headers onto the upstream request
//! - Strip hop-by-hop headers and those naming this hop (Host, Content-Length)
//! - Force the configured User-Agent
//!
//! # Design Decisions
//! - Accept-Encoding is dropped: the body is relayed with our own
//!   Content-Type and no Content-Encoding, so it must arrive identity-coded
//! - Headers listed in `Connection` are hop-by-hop too (RFC 9110 §7.6.1)

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Build the header set for a forwarded download request.
pub fn forward_headers(inbound: &HeaderMap, user_agent: &HeaderValue) -> HeaderMap {
    let mut headers = inbound.clone();

    let listed: Vec<HeaderName> = inbound
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in HOP_BY_HOP.iter().chain(listed.iter()) {
        headers.remove(name);
    }
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(header::ACCEPT_ENCODING);

    headers.insert(header::USER_AGENT, user_agent.clone());
    headers
}

/// Header set for a fresh request carrying only the User-Agent.
pub fn probe_headers(user_agent: &HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, user_agent.clone());
    headers
}
