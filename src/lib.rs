//! cacheXiv: rapid arXiv paper serving edge proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request    ┌──────────┐   ┌─────────┐   ┌──────────┐
//!     ─────────────────▶│   http   │──▶│ routing │──▶│ handlers │
//!                       │  server  │   │  table  │   └────┬─────┘
//!                       └──────────┘   └─────────┘        │
//!                                                         ▼
//!     Client Response   ┌──────────┐               ┌──────────┐
//!     ◀─────────────────│ response │◀──────────────│ upstream │◀──── arxiv.org
//!                       │ (stream) │               │  client  │
//!                       └──────────┘               └──────────┘
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
