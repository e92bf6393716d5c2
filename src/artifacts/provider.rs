//! Inbound seam to the compiler front end and the document store.

use std::sync::Arc;

use url::Url;

use super::ast::AnnotatedAst;
use super::names::NameMap;

/// An annotated AST together with the fingerprint of the build that produced it.
#[derive(Debug, Clone)]
pub struct AstSnapshot {
    pub ast: Arc<AnnotatedAst>,
    pub fingerprint: u64,
}

#[derive(Debug, Clone)]
pub struct NameMapSnapshot {
    pub names: Arc<NameMap>,
    pub fingerprint: u64,
}

/// The current (possibly unsaved) contents of a document.
#[derive(Debug, Clone)]
pub struct VirtualFile {
    pub text: Arc<str>,
    /// Document version from the client, if the document is open.
    pub version: Option<i32>,
}

impl VirtualFile {
    pub fn new(text: impl Into<Arc<str>>, version: Option<i32>) -> Self {
        Self {
            text: text.into(),
            version,
        }
    }
}

/// Supplies the artifacts the semantic token rule depends on.
///
/// Implementations may hand back slightly stale snapshots, as long as each
/// snapshot is internally consistent.
pub trait ArtifactProvider: Send + Sync {
    fn annotated_ast(&self, uri: &Url) -> Option<AstSnapshot>;

    fn name_map(&self, uri: &Url) -> Option<NameMapSnapshot>;

    fn virtual_file(&self, uri: &Url) -> Option<VirtualFile>;
}
