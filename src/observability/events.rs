//! Observable events
//!
//! Every log line names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server is starting up
    ServerStart,
    /// Listener bound, ready to serve
    ServerListening,
    /// Server could not start (FATAL)
    ServerFailed,

    // Configuration
    ConfigLoaded,

    // Book operations
    BookCreated,
    BookUpdated,
    BookDeleted,

    // Failures
    /// A 4xx fail response was returned
    RequestRejected,
    /// A 500 was returned
    InternalError,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerFailed => "SERVER_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed => Severity::Fatal,
            Event::InternalError => Severity::Error,
            Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::ServerStart,
            Event::ServerListening,
            Event::ServerFailed,
            Event::ConfigLoaded,
            Event::BookCreated,
            Event::BookUpdated,
            Event::BookDeleted,
            Event::RequestRejected,
            Event::InternalError,
        ];

        for event in events {
            let name = event.as_str();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_severities() {
        assert!(Event::ServerFailed.is_fatal());
        assert_eq!(Event::InternalError.severity(), Severity::Error);
        assert_eq!(Event::RequestRejected.severity(), Severity::Warn);
        assert_eq!(Event::BookCreated.severity(), Severity::Info);
    }
}
