//! Request handlers for `textDocument/semanticTokens/full` and
//! `textDocument/semanticTokens/full/delta`.
//!
//! Both handlers share one pipeline: read the rule output, encode it with a
//! fresh result id and store it in the session cache. The delta handler then
//! diffs against exactly the entry its own store displaced, so a delta is
//! never computed against a baseline some other request has overwritten.

use std::sync::Arc;

use tower_lsp_server::ls_types::{SemanticTokens, SemanticTokensFullDeltaResult};
use url::Url;

use crate::analysis::{
    SemanticTokensRule, SessionState, StoreOutcome, TokenEncoding, calculate_delta_or_full,
    encode_semantic_tokens,
};
use crate::artifacts::ArtifactProvider;
use crate::error::SemanticResult;

enum Computed {
    /// The rule had nothing to offer; nothing was encoded or cached.
    Empty,
    Stored {
        tokens: SemanticTokens,
        outcome: StoreOutcome,
    },
}

pub(crate) fn empty_tokens() -> SemanticTokens {
    SemanticTokens {
        result_id: None,
        data: Vec::new(),
    }
}

async fn compute_and_store<P: ArtifactProvider + 'static>(
    session: &SessionState,
    rule: &Arc<SemanticTokensRule<P>>,
    uri: &Url,
    encoding: &TokenEncoding,
) -> SemanticResult<Computed> {
    let snapshot = match Arc::clone(rule).tokens_async(uri.clone()).await {
        Ok(snapshot) => snapshot,
        // Already logged at the rule boundary
        Err(error) if error.is_recoverable() => return Ok(Computed::Empty),
        Err(error) => return Err(error),
    };

    let tokens = encode_semantic_tokens(&snapshot.tokens, encoding, &session.ids)?;
    let outcome = session
        .cache
        .store(uri.clone(), tokens.clone(), snapshot.version);
    if let StoreOutcome::Superseded { cached_version } = &outcome {
        log::debug!(
            target: "hieroglyph::cache",
            "Not caching tokens for {} (version {:?}): cache holds version {:?}",
            uri,
            snapshot.version,
            cached_version
        );
    }
    Ok(Computed::Stored { tokens, outcome })
}

/// Handle `textDocument/semanticTokens/full`.
///
/// Recoverable rule failures (no AST, no document text) yield an empty
/// result without a result id and leave the cache untouched. Internal
/// errors propagate to the caller.
pub async fn handle_semantic_tokens_full<P: ArtifactProvider + 'static>(
    session: &SessionState,
    rule: &Arc<SemanticTokensRule<P>>,
    uri: &Url,
    encoding: &TokenEncoding,
) -> SemanticResult<SemanticTokens> {
    log::debug!(
        target: "hieroglyph::semantic",
        "semanticTokens/full uri={} encoding={:?}",
        uri,
        encoding
    );

    match compute_and_store(session, rule, uri, encoding).await? {
        Computed::Empty => Ok(empty_tokens()),
        Computed::Stored { tokens, .. } => Ok(tokens),
    }
}

/// Handle `textDocument/semanticTokens/full/delta`.
///
/// Returns edits only when the entry displaced from the cache is the one
/// the client holds (`previous_result_id`); otherwise the full result.
pub async fn handle_semantic_tokens_full_delta<P: ArtifactProvider + 'static>(
    session: &SessionState,
    rule: &Arc<SemanticTokensRule<P>>,
    uri: &Url,
    previous_result_id: &str,
    encoding: &TokenEncoding,
) -> SemanticResult<SemanticTokensFullDeltaResult> {
    log::debug!(
        target: "hieroglyph::semantic",
        "semanticTokens/full/delta uri={} previous_result_id={} encoding={:?}",
        uri,
        previous_result_id,
        encoding
    );

    let result = match compute_and_store(session, rule, uri, encoding).await? {
        Computed::Empty => SemanticTokensFullDeltaResult::Tokens(empty_tokens()),
        Computed::Stored {
            tokens,
            outcome:
                StoreOutcome::Stored {
                    previous: Some(previous),
                },
        } => calculate_delta_or_full(&previous, &tokens, previous_result_id),
        Computed::Stored { tokens, .. } => SemanticTokensFullDeltaResult::Tokens(tokens),
    };
    Ok(result)
}
