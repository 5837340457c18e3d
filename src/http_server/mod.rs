//! # HTTP Server Module
//!
//! Axum transport for the book handlers.
//!
//! # Endpoints
//!
//! - `/books`, `/books/:id` - Book CRUD
//! - `/health` - Health check
//! - `/metrics` - Operation counters

pub mod book_routes;
pub mod config;
pub mod observability_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use state::AppState;
