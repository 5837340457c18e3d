//! # Book Model
//!
//! The canonical book record, the client payload it is built from, and the
//! lightweight projection returned by list queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{Action, BookError, BookResult};

/// Book record as stored and returned by get-by-id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "timestamp")]
    pub inserted_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for create and update
///
/// Everything but `name` falls back to its zero value when absent. `name`
/// stays optional so that its absence is reported as a validation failure
/// rather than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// A payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBook {
    name: String,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    reading: bool,
}

impl BookPayload {
    /// Validate in order: name present, then page range.
    pub fn validate(self, action: Action) -> BookResult<ValidBook> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookError::MissingName(action)),
        };

        if self.read_page > self.page_count {
            return Err(BookError::InvalidPageRange(action));
        }

        Ok(ValidBook {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

impl Book {
    /// Build a fresh record; both timestamps are `now`.
    pub fn create(id: String, valid: ValidBook, now: DateTime<Utc>) -> Self {
        Self::assemble(id, valid, now, now)
    }

    /// Build the replacement for this record, keeping `id` and `inserted_at`.
    pub fn revise(&self, valid: ValidBook, now: DateTime<Utc>) -> Self {
        Self::assemble(self.id.clone(), valid, self.inserted_at, now)
    }

    fn assemble(
        id: String,
        valid: ValidBook,
        inserted_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let finished = valid.read_page == valid.page_count;
        Self {
            id,
            name: valid.name,
            year: valid.year,
            author: valid.author,
            summary: valid.summary,
            publisher: valid.publisher,
            page_count: valid.page_count,
            read_page: valid.read_page,
            finished,
            reading: valid.reading,
            inserted_at,
            updated_at,
        }
    }

    pub fn projection(&self) -> BookProjection {
        BookProjection {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// List projection: `{id, name, publisher}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookProjection {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-31T08:15:00.000Z`
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
