//! # List Filter
//!
//! Parses list query parameters into a conjunctive filter over books.
//!
//! - `name`: case-insensitive substring; empty means no filter
//! - `reading`, `finished`: `"1"` for true, `"0"` for false
//!
//! Any other flag value is rejected. Unknown parameters are ignored.

use std::collections::HashMap;

use super::errors::{BookError, BookResult};
use super::model::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Substring matched without regard to case
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    /// Parse query parameters from a HashMap
    pub fn parse(params: &HashMap<String, String>) -> BookResult<Self> {
        let name = params
            .get("name")
            .filter(|value| !value.is_empty())
            .cloned();

        Ok(Self {
            name,
            reading: parse_flag(params, "reading")?,
            finished: parse_flag(params, "finished")?,
        })
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.name {
            if !book.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }

        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }

        true
    }
}

fn parse_flag(params: &HashMap<String, String>, key: &str) -> BookResult<Option<bool>> {
    match params.get(key).map(String::as_str) {
        None => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(BookError::InvalidQuery(format!(
            "{} must be \"0\" or \"1\", got \"{}\"",
            key, other
        ))),
    }
}
