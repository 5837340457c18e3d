//! Metrics registry
//!
//! Monotonic counters plus one gauge for the current store size. Values
//! reset only on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared across request handlers
///
/// Relaxed ordering is enough; no counter guards other memory.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    /// 4xx fail responses
    requests_rejected: AtomicU64,
    /// 500 responses
    internal_errors: AtomicU64,
    /// Current number of stored books
    books_stored: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub requests_rejected: u64,
    pub internal_errors: u64,
    pub books_stored: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose stored-books gauge starts at `stored`
    pub fn with_stored(stored: u64) -> Self {
        Self {
            books_stored: AtomicU64::new(stored),
            ..Self::default()
        }
    }

    pub fn record_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
        self.books_stored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
        // Saturate rather than wrap if the gauge was never raised.
        let _ = self
            .books_stored
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    pub fn record_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_internal_error(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            internal_errors: self.internal_errors.load(Ordering::Relaxed),
            books_stored: self.books_stored.load(Ordering::Relaxed),
        }
    }
}
