//! Relative encoding of ranged tokens for the LSP wire format.

use tower_lsp_server::ls_types::{SemanticToken, SemanticTokens};

use super::legend::TokenEncoding;
use super::token_collector::RangedSemanticToken;
use crate::analysis::result_id::ResultIdGenerator;
use crate::error::{SemanticError, SemanticResult};

/// Delta-encode a sorted token list.
///
/// Pure: the same tokens and encoding always give the same data. Fails if
/// the list is not sorted and non-overlapping, since relative encoding
/// cannot express that.
pub fn encode_tokens(
    tokens: &[RangedSemanticToken],
    encoding: &TokenEncoding,
) -> SemanticResult<Vec<SemanticToken>> {
    let mut data = Vec::with_capacity(tokens.len());
    let mut last_line = 0u32;
    let mut last_start = 0u32;
    let mut last_end = 0u32;

    for (index, token) in tokens.iter().enumerate() {
        let out_of_order = index > 0
            && (token.line < last_line || (token.line == last_line && token.start < last_end));
        if out_of_order {
            return Err(SemanticError::internal(format!(
                "semantic token at {}:{} is out of order",
                token.line, token.start
            )));
        }

        let delta_line = token.line - last_line;
        let delta_start = if delta_line == 0 {
            token.start - last_start
        } else {
            token.start
        };

        data.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length,
            token_type: encoding.type_index(token.kind),
            token_modifiers_bitset: encoding.modifier_bitset(token),
        });

        last_line = token.line;
        last_start = token.start;
        last_end = token.end();
    }

    Ok(data)
}

/// Encode tokens and stamp the result with a fresh result id.
///
/// The id is only allocated once encoding has succeeded, so a failed
/// computation never consumes one.
pub fn encode_semantic_tokens(
    tokens: &[RangedSemanticToken],
    encoding: &TokenEncoding,
    ids: &ResultIdGenerator,
) -> SemanticResult<SemanticTokens> {
    let data = encode_tokens(tokens, encoding)?;
    Ok(SemanticTokens {
        result_id: Some(ids.next_result_id()),
        data,
    })
}
