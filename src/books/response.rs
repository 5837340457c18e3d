//! # Response Formatting
//!
//! The `{status, message, data}` envelope shared by every book endpoint.

use serde::{Deserialize, Serialize};

use super::model::{Book, BookProjection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// Success with a message and no data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Create response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedData {
    pub book_id: String,
}

/// List response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksData {
    pub books: Vec<BookProjection>,
}

/// Get-by-id response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookData {
    pub book: Book,
}
