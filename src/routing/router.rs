//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Look up the handler for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over a handful of rules
//! - Explicit NoMatch (`None`) rather than silent default

use crate::routing::matcher::{ExactPathMatcher, Matcher, PathPrefixMatcher};

/// Handler a request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Download,
    Ping,
    Viewer,
    Info,
}

impl Route {
    /// Label used for logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Route::Download => "download",
            Route::Ping => "ping",
            Route::Viewer => "viewer",
            Route::Info => "info",
        }
    }
}

/// A compiled rule: first matching rule wins.
#[derive(Debug)]
struct CompiledRoute {
    matcher: Box<dyn Matcher>,
    route: Route,
}

/// Ordered route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Build the route table. The viewer rule is only present when enabled.
    pub fn new(viewer_enabled: bool) -> Self {
        let mut routes = vec![
            CompiledRoute {
                matcher: Box::new(PathPrefixMatcher::new("/download")),
                route: Route::Download,
            },
            CompiledRoute {
                matcher: Box::new(ExactPathMatcher::new("/ping")),
                route: Route::Ping,
            },
        ];

        if viewer_enabled {
            routes.push(CompiledRoute {
                matcher: Box::new(PathPrefixMatcher::new("/viewer")),
                route: Route::Viewer,
            });
        }

        routes.push(CompiledRoute {
            matcher: Box::new(ExactPathMatcher::new("/")),
            route: Route::Info,
        });

        tracing::debug!(count = routes.len(), viewer_enabled, "Route table compiled");

        Self { routes }
    }

    /// Find the route for a path.
    pub fn resolve(&self, path: &str) -> Option<Route> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(path))
            .map(|r| r.route)
    }
}
