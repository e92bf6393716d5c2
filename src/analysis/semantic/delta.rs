//! Semantic token delta calculation.
//!
//! This module implements the LSP semantic tokens delta algorithm, which
//! encodes the change between two already-encoded token arrays as edits.

use tower_lsp_server::ls_types::{
    SemanticToken, SemanticTokens, SemanticTokensDelta, SemanticTokensEdit,
    SemanticTokensFullDeltaResult,
};

/// Each `SemanticToken` serializes to this many integers.
const TOKEN_WIDTH: usize = 5;

/// Calculate delta or return full tokens.
///
/// A delta is only meaningful when `previous` is the result the client
/// holds, i.e. when its result_id equals `expected_result_id`.
pub fn calculate_delta_or_full(
    previous: &SemanticTokens,
    current: &SemanticTokens,
    expected_result_id: &str,
) -> SemanticTokensFullDeltaResult {
    if previous.result_id.as_deref() == Some(expected_result_id) {
        return SemanticTokensFullDeltaResult::TokensDelta(calculate_semantic_tokens_delta(
            previous, current,
        ));
    }
    SemanticTokensFullDeltaResult::Tokens(current.clone())
}

/// Calculate delta between two sets of semantic tokens using prefix-suffix matching.
///
/// This algorithm:
/// 1. Finds the longest common prefix
/// 2. Finds the longest common suffix of what remains
/// 3. Returns a single edit replacing the middle section
///
/// Identical inputs yield no edits at all.
pub fn calculate_semantic_tokens_delta(
    previous: &SemanticTokens,
    current: &SemanticTokens,
) -> SemanticTokensDelta {
    // --- Step 1: Find common prefix ---
    let common_prefix_len = previous
        .data
        .iter()
        .zip(current.data.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // If all tokens are the same, no edits needed
    if common_prefix_len == previous.data.len() && common_prefix_len == current.data.len() {
        return SemanticTokensDelta {
            result_id: current.result_id.clone(),
            edits: vec![],
        };
    }

    // --- Step 2: Find common suffix ---
    let prev_rest = &previous.data[common_prefix_len..];
    let curr_rest = &current.data[common_prefix_len..];
    let common_suffix_len = prev_rest
        .iter()
        .rev()
        .zip(curr_rest.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    // --- Step 3: Calculate the edit ---
    // LSP requires start and deleteCount to be indices into the flattened
    // integer array, not token indices.
    let delete_token_count = prev_rest.len() - common_suffix_len;
    let insert_token_count = curr_rest.len() - common_suffix_len;
    let data = curr_rest[..insert_token_count].to_vec();

    SemanticTokensDelta {
        result_id: current.result_id.clone(),
        edits: vec![SemanticTokensEdit {
            start: (common_prefix_len * TOKEN_WIDTH) as u32,
            delete_count: (delete_token_count * TOKEN_WIDTH) as u32,
            data: Some(data),
        }],
    }
}

/// Apply delta edits, in order, to a previously served token array.
///
/// This is what a client does with a `SemanticTokensDelta`. Edits that do
/// not fall on token boundaries or run past the end are clamped.
pub fn apply_semantic_tokens_edits(
    previous: &[SemanticToken],
    edits: &[SemanticTokensEdit],
) -> Vec<SemanticToken> {
    let mut tokens = previous.to_vec();
    for edit in edits {
        let start = (edit.start as usize / TOKEN_WIDTH).min(tokens.len());
        let end = (start + edit.delete_count as usize / TOKEN_WIDTH).min(tokens.len());
        let replacement = edit.data.clone().unwrap_or_default();
        tokens.splice(start..end, replacement);
    }
    tokens
}
