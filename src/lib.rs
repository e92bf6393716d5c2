pub mod analysis;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lsp;
pub mod text;

pub use config::{SemanticTokensConfig, WorkspaceSettings};
pub use error::{SemanticError, SemanticResult};

// Re-export the main server implementation
pub use lsp::HieroglyphServer;
