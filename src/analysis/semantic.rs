//! Semantic token computation: classification, range tokenization,
//! relative encoding and delta calculation.

pub mod delta;
pub mod finalize;
pub mod kind;
pub mod legend;
pub mod token_collector;

pub use delta::{
    apply_semantic_tokens_edits, calculate_delta_or_full, calculate_semantic_tokens_delta,
};
pub use finalize::{encode_semantic_tokens, encode_tokens};
pub use kind::{TokenKind, TokenModifiers, classify_entity, classify_local, classify_name};
pub use legend::{LEGEND_MODIFIERS, LEGEND_TYPES, TokenEncoding, legend_type_index};
pub use token_collector::{RangedSemanticToken, collect_ranged_tokens};
