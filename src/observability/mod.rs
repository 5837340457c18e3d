//! Observability for the bookshelf service
//!
//! - Structured logging (JSON, one line per event)
//! - Operation counters
//!
//! Observability is read-only: a logging or metrics failure never changes
//! the outcome of a request.
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::BookCreated, &[("book_id", "abc")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
