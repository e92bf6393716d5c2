pub mod semantic_tokens;

pub use semantic_tokens::{handle_semantic_tokens_full, handle_semantic_tokens_full_delta};
