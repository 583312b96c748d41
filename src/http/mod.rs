//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → request.rs (request ID, paper id, public origin)
//!     → routing layer picks a handler
//!     → response.rs (text / html / streamed pdf)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{PaperId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
