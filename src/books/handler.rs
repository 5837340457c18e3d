//! # Book Handlers
//!
//! Validation and CRUD over an explicitly passed [`BookStore`]. Handlers do
//! no I/O; the transport decides how results are rendered.

use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::errors::{Action, BookError, BookResult};
use super::filter::BookFilter;
use super::id::{IdGenerator, NanoIdGenerator};
use super::model::{Book, BookPayload, BookProjection};
use super::store::BookStore;

pub const ADDED_MESSAGE: &str = "Book added successfully";
pub const UPDATED_MESSAGE: &str = "Book updated successfully";
pub const DELETED_MESSAGE: &str = "Book deleted successfully";

/// Runs book operations with injected id and time sources
#[derive(Clone)]
pub struct BookHandler {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookHandler {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Validate and append a new book, returning its id.
    pub fn add(&self, store: &mut BookStore, payload: BookPayload) -> BookResult<String> {
        let valid = payload.validate(Action::Add)?;

        let id = self.ids.generate();
        let book = Book::create(id.clone(), valid, self.clock.now());
        store.append(book);

        Ok(id)
    }

    /// Projections of every book the filter accepts, in insertion order.
    pub fn list(&self, store: &BookStore, filter: &BookFilter) -> Vec<BookProjection> {
        store
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::projection)
            .collect()
    }

    pub fn get(&self, store: &BookStore, id: &str) -> BookResult<Book> {
        store
            .find(id)
            .cloned()
            .ok_or(BookError::NotFound(Action::Fetch))
    }

    /// Replace the book at `id` with one rebuilt from `payload`.
    ///
    /// Payload validation runs before the lookup, so a bad payload against a
    /// missing id reports 400, not 404.
    pub fn update(&self, store: &mut BookStore, id: &str, payload: BookPayload) -> BookResult<()> {
        let valid = payload.validate(Action::Update)?;

        let index = store
            .position(id)
            .ok_or(BookError::NotFound(Action::Update))?;
        let current = store
            .get(index)
            .ok_or_else(|| BookError::Internal(format!("index {} vanished for {}", index, id)))?;

        let revised = current.revise(valid, self.clock.now());
        store.replace(index, revised);

        Ok(())
    }

    pub fn delete(&self, store: &mut BookStore, id: &str) -> BookResult<Book> {
        let index = store
            .position(id)
            .ok_or(BookError::NotFound(Action::Delete))?;

        store
            .remove(index)
            .ok_or_else(|| BookError::Internal(format!("index {} vanished for {}", index, id)))
    }
}

impl Default for BookHandler {
    fn default() -> Self {
        Self::new(Arc::new(NanoIdGenerator), Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for BookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookHandler").finish_non_exhaustive()
    }
}
