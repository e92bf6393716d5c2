//! Per-session mutable state shared by the semantic token handlers.

use super::result_id::ResultIdGenerator;
use super::semantic_cache::SemanticTokenCache;

/// State that lives for one server session and nothing longer.
///
/// Only the request handlers write to it. Tests create a fresh session
/// instead of resetting anything global.
#[derive(Default)]
pub struct SessionState {
    pub cache: SemanticTokenCache,
    pub ids: ResultIdGenerator,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
