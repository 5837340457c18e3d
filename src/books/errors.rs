//! # Book Errors
//!
//! Error types for the book handlers. Every variant is recovered at the
//! handler boundary and rendered as a `fail` envelope.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};

use super::response::Envelope;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Generic text returned to clients for internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The operation that failed, used to pick the message variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Fetch,
    Update,
    Delete,
}

impl Action {
    /// Returns the verb used in client messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Fetch => "fetch",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn not_found_message(action: &Action) -> String {
    match action {
        Action::Fetch => "Book not found".to_string(),
        other => format!("Failed to {} book. Id not found", other),
    }
}

/// Book handler errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// `name` absent or empty
    #[error("Failed to {0} book. Please provide the book name")]
    MissingName(Action),

    /// `readPage` exceeds `pageCount`
    #[error("Failed to {0} book. readPage must not be greater than pageCount")]
    InvalidPageRange(Action),

    /// No book with the requested id
    #[error("{}", not_found_message(.0))]
    NotFound(Action),

    /// Malformed list filter
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected failure; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::MissingName(_) => StatusCode::BAD_REQUEST,
            BookError::InvalidPageRange(_) => StatusCode::BAD_REQUEST,
            BookError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            BookError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            BookError::NotFound(_) => StatusCode::NOT_FOUND,

            BookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients
    pub fn client_message(&self) -> String {
        match self {
            BookError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, BookError::Internal(_))
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BookError::Internal(detail) = &self {
            log_event_with_fields(Event::InternalError, &[("detail", detail.as_str())]);
        } else {
            let reason = self.to_string();
            log_event_with_fields(
                Event::RequestRejected,
                &[("reason", reason.as_str()), ("status", status.as_str())],
            );
        }

        let body = Json(Envelope::<()>::fail(self.client_message()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BookError::MissingName(Action::Add).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BookError::InvalidPageRange(Action::Update).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BookError::NotFound(Action::Delete).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BookError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_follow_action() {
        assert_eq!(
            BookError::MissingName(Action::Add).to_string(),
            "Failed to add book. Please provide the book name"
        );
        assert_eq!(
            BookError::MissingName(Action::Update).to_string(),
            "Failed to update book. Please provide the book name"
        );
        assert_eq!(
            BookError::InvalidPageRange(Action::Add).to_string(),
            "Failed to add book. readPage must not be greater than pageCount"
        );
        assert_eq!(BookError::NotFound(Action::Fetch).to_string(), "Book not found");
        assert_eq!(
            BookError::NotFound(Action::Delete).to_string(),
            "Failed to delete book. Id not found"
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = BookError::Internal("lock poisoned".to_string());
        assert!(err.is_internal());
        assert_eq!(err.client_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("lock poisoned"));
    }
}
