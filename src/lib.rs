//! bookshelf - an in-memory bookshelf inventory API
//!
//! - [`books`]: record model, store, validation and CRUD handlers
//! - [`http_server`]: axum routes and server
//! - [`observability`]: structured logging and counters
//! - [`cli`]: command-line entry point

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
