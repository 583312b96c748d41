//! Upstream origin subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → headers.rs (clone inbound headers, strip hop-by-hop, force User-Agent)
//!     → client.rs (GET {origin}/pdf/{id}.pdf or {origin}/)
//!     → reqwest::Response (headers received, body unread)
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client; its pool is the only cross-request state
//! - No retries, no request timeout; optional connect timeout only
//! - Response bodies are never buffered here

pub mod client;
pub mod error;
pub mod headers;

pub use client::UpstreamClient;
pub use error::{error_chain, UpstreamError};
