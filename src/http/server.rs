//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener with graceful shutdown
//! - Dispatch requests through the route table to handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{ProxyConfig, ViewerConfig};
use crate::handlers;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::routing::{Route, Router};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
    pub upstream: UpstreamClient,
    pub viewer: Arc<ViewerConfig>,
}

/// HTTP server for the edge proxy.
pub struct HttpServer {
    router: axum::Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let state = AppState {
            router: Arc::new(Router::new(config.viewer.enabled)),
            upstream: UpstreamClient::new(&config.upstream)?,
            viewer: Arc::new(config.viewer.clone()),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> axum::Router {
        axum::Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .fallback(dispatch)
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The assembled service, for driving requests without a socket.
    pub fn router(&self) -> axum::Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            viewer_enabled = self.config.viewer.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Single entry point: resolve the route, then hand off to its handler.
/// The inbound body is never read.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let (parts, _body) = request.into_parts();
    let route = state.router.resolve(parts.uri.path());

    tracing::debug!(
        request_id = %request_id(&parts),
        method = %parts.method,
        path = %parts.uri.path(),
        route = route.map_or("none", Route::name),
        "Dispatching request"
    );

    let response = match route {
        Some(Route::Download) => handlers::download(&state.upstream, &parts).await,
        Some(Route::Ping) => handlers::ping(&state.upstream).await,
        Some(Route::Viewer) => handlers::viewer(&state.viewer, &parts),
        Some(Route::Info) => handlers::info(),
        None => handlers::not_found(),
    };

    metrics::record_request(
        route.map_or("not_found", Route::name),
        response.status().as_u16(),
        start,
    );
    response
}
