//! # Book Store
//!
//! In-memory, insertion-ordered collection that owns every book record.
//! The store does no locking of its own; callers that share it across
//! threads wrap it (see `http_server::AppState`).

use super::model::Book;

#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end. Never overwrites.
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Swap in a new record at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, book: Book) -> Option<Book> {
        let slot = self.books.get_mut(index)?;
        Some(std::mem::replace(slot, book))
    }

    /// Remove the record at `index`, shifting later records down.
    pub fn remove(&mut self, index: usize) -> Option<Book> {
        if index < self.books.len() {
            Some(self.books.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
