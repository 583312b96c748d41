//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → router.rs (ordered rule scan)
//!     → matcher.rs (prefix / exact comparison)
//!     → Return: matched Route or NoMatch
//!
//! Route Compilation (at startup):
//!     viewer enabled?
//!     → download, ping, [viewer], root
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same path always matches same route
//! - First match wins

pub mod matcher;
pub mod router;

pub use router::{Route, Router};
