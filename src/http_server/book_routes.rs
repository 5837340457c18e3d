//! Book HTTP Routes
//!
//! - `POST   /books`
//! - `GET    /books?name&reading&finished`
//! - `GET    /books/:id`
//! - `PUT    /books/:id`
//! - `DELETE /books/:id`

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::books::handler::{ADDED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::books::response::{BookData, BooksData, CreatedData};
use crate::books::{BookError, BookFilter, BookPayload, BookResult, Envelope};
use crate::observability::{log_event_with_fields, Event};

use super::state::AppState;

/// Create book routes
pub fn book_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(add_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

fn decode_payload(payload: Result<Json<BookPayload>, JsonRejection>) -> BookResult<BookPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| BookError::InvalidBody(rejection.body_text()))
}

async fn add_book_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<CreatedData>>), BookError> {
    let id = state.observe(decode_payload(payload).and_then(|payload| {
        let mut store = state.write_store()?;
        state.handler.add(&mut store, payload)
    }))?;

    state.metrics.record_created();
    log_event_with_fields(Event::BookCreated, &[("book_id", id.as_str())]);

    let body = Envelope::success(CreatedData { book_id: id }).with_message(ADDED_MESSAGE);
    Ok((StatusCode::CREATED, Json(body)))
}

async fn list_books_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<BooksData>>, BookError> {
    let books = state.observe(BookFilter::parse(&params).and_then(|filter| {
        let store = state.read_store()?;
        Ok(state.handler.list(&store, &filter))
    }))?;

    Ok(Json(Envelope::success(BooksData { books })))
}

async fn get_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<BookData>>, BookError> {
    let book = state.observe(
        state
            .read_store()
            .and_then(|store| state.handler.get(&store, &id)),
    )?;

    Ok(Json(Envelope::success(BookData { book })))
}

async fn update_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Envelope<()>>, BookError> {
    state.observe(decode_payload(payload).and_then(|payload| {
        let mut store = state.write_store()?;
        state.handler.update(&mut store, &id, payload)
    }))?;

    state.metrics.record_updated();
    log_event_with_fields(Event::BookUpdated, &[("book_id", id.as_str())]);

    Ok(Json(Envelope::<()>::message(UPDATED_MESSAGE)))
}

async fn delete_book_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, BookError> {
    state.observe(
        state
            .write_store()
            .and_then(|mut store| state.handler.delete(&mut store, &id)),
    )?;

    state.metrics.record_deleted();
    log_event_with_fields(Event::BookDeleted, &[("book_id", id.as_str())]);

    Ok(Json(Envelope::<()>::message(DELETED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let _router = book_routes(Arc::new(AppState::default()));
    }

    #[test]
    fn test_decode_payload_passes_through() {
        let payload = BookPayload {
            name: Some("Bumi".to_string()),
            ..Default::default()
        };
        let decoded = decode_payload(Ok(Json(payload.clone()))).unwrap();
        assert_eq!(decoded, payload);
    }
}
