//! # Books Module
//!
//! The book inventory core: record model, in-memory store, validation and
//! the five CRUD handlers. Transport lives in `http_server`.

pub mod clock;
pub mod errors;
pub mod filter;
pub mod handler;
pub mod id;
pub mod model;
pub mod response;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{Action, BookError, BookResult};
pub use filter::BookFilter;
pub use handler::BookHandler;
pub use id::{IdGenerator, NanoIdGenerator, SequentialIdGenerator};
pub use model::{Book, BookPayload, BookProjection};
pub use response::{Envelope, Status};
pub use store::BookStore;
