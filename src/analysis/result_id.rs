//! Atomic result_id generation for semantic tokens.
//!
//! Provides sequential, thread-safe result IDs for LSP semantic token responses.
//! Each server session owns its own generator.

use std::sync::atomic::{AtomicU64, Ordering};

/// Session-scoped source of semantic token result ids.
#[derive(Debug, Default)]
pub struct ResultIdGenerator {
    counter: AtomicU64,
}

impl ResultIdGenerator {
    /// Create a generator whose first id is "0".
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a unique, monotonically increasing result_id.
    ///
    /// Read and increment happen in one atomic step, so concurrent callers
    /// never observe the same id.
    pub fn next_result_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}
