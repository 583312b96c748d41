//! Request handlers, one per route.
//!
//! Handlers receive already-routed request parts; the inbound body is never
//! read. Each handler owns its error type whose `Display` is the exact body
//! returned to the client.

pub mod download;
pub mod info;
pub mod ping;
pub mod viewer;

pub use download::{download, DownloadError};
pub use info::{info, not_found, BANNER};
pub use ping::ping;
pub use viewer::{viewer, ViewerError};
