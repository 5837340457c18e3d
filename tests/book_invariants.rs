//! Book Handler Invariant Tests
//!
//! Properties the handlers must keep regardless of transport:
//! - `finished` is always `readPage == pageCount`
//! - `readPage > pageCount` never reaches the store
//! - operations on unknown ids fail without mutating the store
//! - `insertedAt` is fixed, `updatedAt` never goes backwards

use std::sync::Arc;

use bookshelf::books::{
    Action, Book, BookError, BookFilter, BookHandler, BookPayload, BookStore, Clock,
    ManualClock, NanoIdGenerator, SequentialIdGenerator,
};
use chrono::{Duration, TimeZone, Utc};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (BookHandler, Arc<ManualClock>, BookStore) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let handler = BookHandler::new(Arc::new(SequentialIdGenerator::new("inv")), clock.clone());
    (handler, clock, BookStore::new())
}

fn payload(name: &str, page_count: u32, read_page: u32, reading: bool) -> BookPayload {
    BookPayload {
        name: Some(name.to_string()),
        year: 1988,
        author: "Paulo Coelho".to_string(),
        summary: String::new(),
        publisher: "HarperTorch".to_string(),
        page_count,
        read_page,
        reading,
    }
}

fn snapshot(store: &BookStore) -> Vec<Book> {
    store.iter().cloned().collect()
}

// =============================================================================
// Create Invariants
// =============================================================================

/// `finished` matches the page counts for every accepted create.
#[test]
fn test_finished_flag_matches_pages() {
    let (handler, _clock, mut store) = setup();

    for page_count in [0u32, 1, 7, 100, 1000] {
        for read_page in [0u32, 1, 6, 7, 99, 100, 1000, 1001] {
            let result = handler.add(&mut store, payload("Book", page_count, read_page, false));

            if read_page > page_count {
                assert_eq!(result, Err(BookError::InvalidPageRange(Action::Add)));
                continue;
            }

            let id = result.unwrap();
            let book = handler.get(&store, &id).unwrap();
            assert_eq!(book.finished, read_page == page_count);
            assert!(book.read_page <= book.page_count);
        }
    }
}

/// Rejected creates leave the store untouched.
#[test]
fn test_invalid_create_never_stored() {
    let (handler, _clock, mut store) = setup();
    handler.add(&mut store, payload("Kept", 10, 1, false)).unwrap();
    let before = snapshot(&store);

    let _ = handler.add(&mut store, payload("Bumi", 100, 150, true));
    let _ = handler.add(&mut store, payload("", 100, 50, true));
    let _ = handler.add(&mut store, BookPayload::default());

    assert_eq!(snapshot(&store), before);
}

/// Freshly created books carry identical timestamps.
#[test]
fn test_created_timestamps_equal() {
    let (handler, clock, mut store) = setup();
    clock.advance(Duration::milliseconds(1234));

    let id = handler.add(&mut store, payload("Bumi", 100, 100, false)).unwrap();
    let book = handler.get(&store, &id).unwrap();

    assert_eq!(book.inserted_at, clock.now());
    assert_eq!(book.inserted_at, book.updated_at);
}

/// Random ids stay unique across many creates.
#[test]
fn test_random_ids_unique_in_store() {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let handler = BookHandler::new(Arc::new(NanoIdGenerator), clock);
    let mut store = BookStore::new();

    let mut ids: Vec<String> = (0..500)
        .map(|i| handler.add(&mut store, payload(&format!("B{}", i), 1, 0, false)).unwrap())
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 500);
}

// =============================================================================
// Update Invariants
// =============================================================================

/// Repeated updates never move `insertedAt` and never rewind `updatedAt`.
#[test]
fn test_update_timestamps() {
    let (handler, clock, mut store) = setup();
    let id = handler.add(&mut store, payload("Bumi", 100, 0, true)).unwrap();
    let inserted_at = handler.get(&store, &id).unwrap().inserted_at;

    let mut last_updated = inserted_at;
    for step in 0..5u32 {
        if step % 2 == 0 {
            clock.advance(Duration::seconds(1));
        }
        handler
            .update(&mut store, &id, payload("Bumi", 100, step * 20, true))
            .unwrap();

        let book = handler.get(&store, &id).unwrap();
        assert_eq!(book.inserted_at, inserted_at);
        assert!(book.updated_at >= last_updated);
        assert_eq!(book.finished, step * 20 == 100);
        last_updated = book.updated_at;
    }
}

/// Update keeps the record's position in the store.
#[test]
fn test_update_keeps_position() {
    let (handler, _clock, mut store) = setup();
    let a = handler.add(&mut store, payload("A", 10, 0, false)).unwrap();
    let b = handler.add(&mut store, payload("B", 10, 0, false)).unwrap();
    let c = handler.add(&mut store, payload("C", 10, 0, false)).unwrap();

    handler.update(&mut store, &b, payload("B2", 10, 10, false)).unwrap();

    let order: Vec<_> = store.iter().map(|book| book.id.clone()).collect();
    assert_eq!(order, vec![a, b, c]);
    assert_eq!(store.get(1).unwrap().name, "B2");
}

// =============================================================================
// Unknown Id Invariants
// =============================================================================

/// Get, update and delete on an unknown id fail with NotFound and change nothing.
#[test]
fn test_unknown_id_never_mutates() {
    let (handler, _clock, mut store) = setup();
    handler.add(&mut store, payload("A", 10, 0, false)).unwrap();
    handler.add(&mut store, payload("B", 10, 5, true)).unwrap();
    let before = snapshot(&store);

    for id in ["", "nope", "inv-99", "INV-1"] {
        assert_eq!(handler.get(&store, id), Err(BookError::NotFound(Action::Fetch)));
        assert_eq!(
            handler.update(&mut store, id, payload("X", 1, 1, false)),
            Err(BookError::NotFound(Action::Update))
        );
        assert_eq!(
            handler.delete(&mut store, id).map(|_| ()),
            Err(BookError::NotFound(Action::Delete))
        );
    }

    assert_eq!(snapshot(&store), before);
}

/// Delete removes exactly one record.
#[test]
fn test_delete_removes_exactly_one() {
    let (handler, _clock, mut store) = setup();
    let ids: Vec<_> = (0..5)
        .map(|i| handler.add(&mut store, payload(&format!("B{}", i), 10, 0, false)).unwrap())
        .collect();

    handler.delete(&mut store, &ids[2]).unwrap();

    assert_eq!(store.len(), 4);
    assert!(handler.get(&store, &ids[2]).is_err());
    let remaining: Vec<_> = store.iter().map(|book| book.id.clone()).collect();
    assert_eq!(remaining, vec![ids[0].clone(), ids[1].clone(), ids[3].clone(), ids[4].clone()]);
}

// =============================================================================
// List Invariants
// =============================================================================

/// Every listed projection satisfies every active filter.
#[test]
fn test_list_is_conjunctive() {
    let (handler, _clock, mut store) = setup();
    for (name, reading, read_page) in [
        ("The Alchemist", true, 10),
        ("the alchemist", false, 10),
        ("Alchemy 101", true, 100),
        ("Bumi", true, 100),
    ] {
        handler.add(&mut store, payload(name, 100, read_page, reading)).unwrap();
    }

    let filter = BookFilter {
        name: Some("alchem".to_string()),
        reading: Some(true),
        finished: None,
    };
    let names: Vec<_> = handler
        .list(&store, &filter)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["The Alchemist", "Alchemy 101"]);

    let filter = BookFilter {
        finished: Some(true),
        reading: Some(true),
        ..Default::default()
    };
    let names: Vec<_> = handler
        .list(&store, &filter)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Alchemy 101", "Bumi"]);
}
