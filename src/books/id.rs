//! Book id generation.
//!
//! Production ids are 16 random characters from the 64-symbol URL-safe
//! alphabet. Collisions are treated as practically impossible and are not
//! checked for.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Length of generated ids
pub const ID_LENGTH: usize = 16;

const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Source of fresh book ids
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random URL-safe ids
#[derive(Debug, Default, Clone, Copy)]
pub struct NanoIdGenerator;

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("book")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
