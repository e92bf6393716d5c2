pub mod result_id;
pub mod rule;
pub mod semantic;
pub mod semantic_cache;
pub mod session;

// Re-export main types and functions
pub use result_id::ResultIdGenerator;
pub use rule::{
    Fingerprint, RuleOutput, SemanticTokensRule, TokenSnapshot, ast_file_key,
    compute_semantic_tokens,
};
pub use semantic::{
    LEGEND_MODIFIERS, LEGEND_TYPES, RangedSemanticToken, TokenEncoding, TokenKind, TokenModifiers,
    apply_semantic_tokens_edits, calculate_delta_or_full, calculate_semantic_tokens_delta,
    classify_entity, classify_local, classify_name, collect_ranged_tokens, encode_semantic_tokens,
    encode_tokens, legend_type_index,
};
pub use semantic_cache::{CachedTokens, SemanticTokenCache, StoreOutcome};
pub use session::SessionState;
