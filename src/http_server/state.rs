//! Shared application state
//!
//! The store is guarded by one `RwLock`: create, update and delete hold the
//! write lock across their whole find-then-mutate sequence; list and get
//! share the read lock.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::books::{BookError, BookHandler, BookResult, BookStore};
use crate::observability::MetricsRegistry;

#[derive(Debug)]
pub struct AppState {
    store: RwLock<BookStore>,
    pub handler: BookHandler,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(handler: BookHandler) -> Self {
        Self::with_store(handler, BookStore::new())
    }

    pub fn with_store(handler: BookHandler, store: BookStore) -> Self {
        let metrics = MetricsRegistry::with_stored(store.len() as u64);
        Self {
            store: RwLock::new(store),
            handler,
            metrics: Arc::new(metrics),
        }
    }

    pub fn read_store(&self) -> BookResult<RwLockReadGuard<'_, BookStore>> {
        self.store
            .read()
            .map_err(|_| BookError::Internal("Lock poisoned".to_string()))
    }

    pub fn write_store(&self) -> BookResult<RwLockWriteGuard<'_, BookStore>> {
        self.store
            .write()
            .map_err(|_| BookError::Internal("Lock poisoned".to_string()))
    }

    /// Count a failed operation before passing it on
    pub fn observe<T>(&self, result: BookResult<T>) -> BookResult<T> {
        if let Err(err) = &result {
            if err.is_internal() {
                self.metrics.record_internal_error();
            } else {
                self.metrics.record_rejected();
            }
        }
        result
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookHandler::default())
    }
}
