//! Error handling types for hieroglyph
//!
//! Errors are plain values: the build rule memoizes them alongside successful
//! results, so every variant is `Clone` and carries owned data only.

use thiserror::Error;
use tower_lsp_server::jsonrpc;

/// Error type for semantic token computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// The compiler snapshot has no AST for the requested file
    #[error("No AST available for {uri}")]
    NoAst { uri: String },

    /// The compiler snapshot has no name map for the requested file
    #[error("No name map available for {uri}")]
    NoNameMap { uri: String },

    /// The document text is not tracked (never opened, or already closed)
    #[error("No virtual file for {uri}")]
    NoVirtualFile { uri: String },

    /// Unexpected failure inside classification or encoding
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for semantic token operations
pub type SemanticResult<T> = Result<T, SemanticError>;

impl SemanticError {
    /// Create a missing-AST error
    pub fn no_ast(uri: impl Into<String>) -> Self {
        SemanticError::NoAst { uri: uri.into() }
    }

    /// Create a missing-name-map error
    pub fn no_name_map(uri: impl Into<String>) -> Self {
        SemanticError::NoNameMap { uri: uri.into() }
    }

    /// Create a missing-virtual-file error
    pub fn no_virtual_file(uri: impl Into<String>) -> Self {
        SemanticError::NoVirtualFile { uri: uri.into() }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        SemanticError::Internal(message.into())
    }

    /// Whether the failure should surface as an empty result instead of a
    /// protocol error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SemanticError::Internal(_))
    }
}

impl From<SemanticError> for jsonrpc::Error {
    fn from(error: SemanticError) -> Self {
        let mut rpc = jsonrpc::Error::internal_error();
        rpc.message = error.to_string().into();
        rpc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_ast(SemanticError::no_ast("file:///A.hs"), true)]
    #[case::no_name_map(SemanticError::no_name_map("file:///A.hs"), true)]
    #[case::no_virtual_file(SemanticError::no_virtual_file("file:///A.hs"), true)]
    #[case::internal(SemanticError::internal("boom"), false)]
    fn test_is_recoverable(#[case] error: SemanticError, #[case] expected: bool) {
        assert_eq!(error.is_recoverable(), expected);
    }

    #[test]
    fn test_into_jsonrpc_error_keeps_message() {
        let rpc: jsonrpc::Error = SemanticError::internal("token overflow").into();
        assert_eq!(rpc.code, jsonrpc::ErrorCode::InternalError);
        assert_eq!(rpc.message, "Internal error: token overflow");
    }
}
