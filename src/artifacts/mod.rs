//! Compiler artifacts consumed by the semantic token pipeline.
//!
//! The front end that produces these lives outside this crate. Everything here
//! is an immutable snapshot: the token pipeline reads it for the duration of
//! one computation and never mutates it.

pub mod ast;
pub mod names;
pub mod provider;

pub use ast::{
    AnnotatedAst, AstNode, ContextInfo, DeclKind, Identifier, IdentifierDetails, ModuleName, Name,
    RefMap, Span,
};
pub use names::{Entity, NameMap, TyConFlavour};
pub use provider::{ArtifactProvider, AstSnapshot, NameMapSnapshot, VirtualFile};
