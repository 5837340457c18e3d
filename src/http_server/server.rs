//! # HTTP Server
//!
//! Combines the book and observability routers behind a CORS layer.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};

use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::state::AppState;

/// HTTP server for the bookshelf API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(AppState::default()))
    }

    /// Create a server around existing state (injected ids, clock, store)
    pub fn with_state(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if config.cors_origins.is_empty() {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let metrics = state.metrics.clone();

        Router::new()
            .merge(book_routes(state))
            .merge(observability_routes(metrics))
            .layer(ServiceBuilder::new().layer(Self::cors_layer(config)))
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until the process stops
    pub async fn start(self) -> Result<(), io::Error> {
        let addr = self.socket_addr();
        log_event_with_fields(Event::ServerStart, &[("addr", addr.as_str())]);

        let listener = TcpListener::bind(addr.as_str()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<(), io::Error> {
        let local = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", local.as_str())]);

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
