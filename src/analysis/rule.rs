//! Memoized build rule producing the unencoded token list of a file.
//!
//! The rule depends on two compiler artifacts, the annotated AST and the
//! name map. Their fingerprints form the memo key: as long as neither
//! changes, the previous output is reused without touching the text.
//!
//! Failures are values. They are logged once at the rule boundary and handed
//! to the request handlers, which turn recoverable ones into empty results.

use std::sync::Arc;

use dashmap::DashMap;
use url::Url;

use crate::analysis::semantic::{RangedSemanticToken, collect_ranged_tokens};
use crate::artifacts::{AnnotatedAst, ArtifactProvider, NameMap, VirtualFile};
use crate::error::{SemanticError, SemanticResult};

/// Fingerprints of the artifacts an output was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub ast: u64,
    pub names: u64,
}

/// Rule output: the token list plus the document version it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub tokens: Vec<RangedSemanticToken>,
    pub version: Option<i32>,
}

pub type RuleOutput = SemanticResult<Arc<TokenSnapshot>>;

struct MemoEntry {
    fingerprint: Fingerprint,
    output: RuleOutput,
}

/// Key under which the annotated AST stores a document's subtree.
pub fn ast_file_key(uri: &Url) -> String {
    uri.to_file_path()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| uri.path().to_string())
}

/// Compute a file's tokens from one consistent set of artifacts.
pub fn compute_semantic_tokens(
    uri: &Url,
    ast: &AnnotatedAst,
    names: &NameMap,
    file: Option<VirtualFile>,
) -> RuleOutput {
    let root = ast
        .file(&ast_file_key(uri))
        .ok_or_else(|| SemanticError::no_ast(uri.as_str()))?;
    let file = file.ok_or_else(|| SemanticError::no_virtual_file(uri.as_str()))?;
    let tokens = collect_ranged_tokens(root, names, &file.text);
    Ok(Arc::new(TokenSnapshot {
        tokens,
        version: file.version,
    }))
}

/// The semantic token build rule, memoized per document.
pub struct SemanticTokensRule<P> {
    provider: P,
    memo: DashMap<Url, MemoEntry>,
}

impl<P: ArtifactProvider> SemanticTokensRule<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            memo: DashMap::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Return the tokens for `uri`, recomputing only if an input changed.
    pub fn tokens(&self, uri: &Url) -> RuleOutput {
        let Some(ast) = self.provider.annotated_ast(uri) else {
            return Self::report(uri, Err(SemanticError::no_ast(uri.as_str())));
        };
        let Some(names) = self.provider.name_map(uri) else {
            return Self::report(uri, Err(SemanticError::no_name_map(uri.as_str())));
        };
        let fingerprint = Fingerprint {
            ast: ast.fingerprint,
            names: names.fingerprint,
        };

        if let Some(entry) = self.memo.get(uri)
            && entry.fingerprint == fingerprint
        {
            log::trace!(target: "hieroglyph::rule", "Reusing tokens for {}", uri);
            return entry.output.clone();
        }

        log::debug!(
            target: "hieroglyph::rule",
            "Computing tokens for {} (ast={}, names={})",
            uri,
            fingerprint.ast,
            fingerprint.names
        );
        let output = compute_semantic_tokens(
            uri,
            &ast.ast,
            &names.names,
            self.provider.virtual_file(uri),
        );

        // A missing virtual file is not a function of the fingerprint: the
        // document may be opened later without the artifacts changing.
        if !matches!(output, Err(SemanticError::NoVirtualFile { .. })) {
            self.memo.insert(
                uri.clone(),
                MemoEntry {
                    fingerprint,
                    output: output.clone(),
                },
            );
        }
        Self::report(uri, output)
    }

    /// Run the rule off the async executor.
    ///
    /// This is the point where a request waits for the compiler artifacts.
    pub async fn tokens_async(self: Arc<Self>, uri: Url) -> RuleOutput
    where
        P: 'static,
    {
        tokio::task::spawn_blocking(move || self.tokens(&uri))
            .await
            .unwrap_or_else(|error| {
                Err(SemanticError::internal(format!(
                    "semantic token rule did not complete: {}",
                    error
                )))
            })
    }

    /// Drop the memoized output for a document (e.g., on document close).
    pub fn invalidate(&self, uri: &Url) {
        self.memo.remove(uri);
    }

    fn report(uri: &Url, output: RuleOutput) -> RuleOutput {
        if let Err(error) = &output {
            if error.is_recoverable() {
                log::warn!(target: "hieroglyph::rule", "No semantic tokens for {}: {}", uri, error);
            } else {
                log::error!(
                    target: "hieroglyph::rule",
                    "Semantic token rule failed for {}: {}",
                    uri,
                    error
                );
            }
        }
        output
    }
}
