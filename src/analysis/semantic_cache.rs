//! Semantic token caching with result_id validation.
//!
//! Holds the most recently served tokens per document so that
//! `semanticTokens/full/delta` requests can be answered with edits.
//!
//! ## Cache Lifecycle
//!
//! Entries are NOT invalidated on `didChange`: the next delta request needs
//! the previous tokens to diff against, and the result_id check at lookup
//! keeps an outdated baseline from being used. Entries go away on `didClose`.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tower_lsp_server::ls_types::SemanticTokens;
use url::Url;

/// A served result together with the document version it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTokens {
    pub tokens: SemanticTokens,
    pub version: Option<i32>,
}

/// What happened to a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The entry was written; `previous` is the entry it displaced.
    Stored { previous: Option<SemanticTokens> },
    /// A result for a newer document version is already cached.
    Superseded { cached_version: Option<i32> },
}

/// Thread-safe semantic token cache.
///
/// Each operation holds the shard lock of one document only for the
/// duration of a map access.
pub struct SemanticTokenCache {
    cache: DashMap<Url, CachedTokens>,
}

impl SemanticTokenCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Store tokens for a document, returning the entry they replaced.
    ///
    /// Reading the old entry and writing the new one is a single atomic step,
    /// so two concurrent writers for the same document each see exactly the
    /// entry they displaced. A write computed from an older document version
    /// than the cached one is rejected.
    pub fn store(&self, uri: Url, tokens: SemanticTokens, version: Option<i32>) -> StoreOutcome {
        match self.cache.entry(uri) {
            Entry::Occupied(mut entry) => {
                let cached_version = entry.get().version;
                if let (Some(cached), Some(incoming)) = (cached_version, version)
                    && incoming < cached
                {
                    return StoreOutcome::Superseded { cached_version };
                }
                let previous = entry.insert(CachedTokens { tokens, version });
                StoreOutcome::Stored {
                    previous: Some(previous.tokens),
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(CachedTokens { tokens, version });
                StoreOutcome::Stored { previous: None }
            }
        }
    }

    /// Retrieve semantic tokens for a document.
    pub fn get(&self, uri: &Url) -> Option<SemanticTokens> {
        self.cache.get(uri).map(|entry| entry.tokens.clone())
    }

    /// Remove cached tokens for a document (e.g., on document close).
    pub fn remove(&self, uri: &Url) {
        self.cache.remove(uri);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for SemanticTokenCache {
    fn default() -> Self {
        Self::new()
    }
}
