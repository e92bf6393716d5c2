//! Annotated syntax tree as handed over by the compiler front end.
//!
//! Nodes carry a source span and the identifiers that occur exactly at that
//! span, each decorated with how it occurs (binding site, use, declaration...).

use std::collections::{BTreeMap, BTreeSet};

/// A position in the compiler's coordinate space.
///
/// Both fields are 0-based; `col` counts Unicode scalar values, not UTF-16
/// code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SrcPos {
    pub line: u32,
    pub col: u32,
}

/// A half-open source span `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: SrcPos,
    pub end: SrcPos,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: SrcPos {
                line: start_line,
                col: start_col,
            },
            end: SrcPos {
                line: end_line,
                col: end_col,
            },
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleName(pub String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A resolved name.
///
/// `unique` is the identity used by the name map; `module` is `None` for
/// names bound inside the file itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    pub occ: String,
    pub unique: u64,
    pub module: Option<ModuleName>,
}

impl Name {
    pub fn local(occ: impl Into<String>, unique: u64) -> Self {
        Self {
            occ: occ.into(),
            unique,
            module: None,
        }
    }

    pub fn external(occ: impl Into<String>, unique: u64, module: ModuleName) -> Self {
        Self {
            occ: occ.into(),
            unique,
            module: Some(module),
        }
    }

    /// Operator names start with a symbol character (`+`, `<$>`, `:|`).
    pub fn is_symbolic(&self) -> bool {
        self.occ
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphanumeric() || c == '_' || c == '\''))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Module(ModuleName),
    Name(Name),
}

/// Declaration flavours that introduce a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclKind {
    Class,
    Data,
    Con,
    Synonym,
    Family,
    PatSyn,
    Instance,
}

/// How an identifier occurs at a particular span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContextInfo {
    Use,
    Import,
    Export,
    ValBind,
    PatternBind,
    MatchBind,
    TyVarBind,
    ClassTyDecl,
    RecField,
    Decl(DeclKind),
}

impl ContextInfo {
    /// Whether this occurrence introduces the name rather than referring to it.
    pub fn is_binding(&self) -> bool {
        !matches!(
            self,
            ContextInfo::Use | ContextInfo::Import | ContextInfo::Export
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierDetails {
    /// The occurrence has a function type (`a -> b`).
    pub function_type: bool,
    pub contexts: BTreeSet<ContextInfo>,
}

impl IdentifierDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: ContextInfo) -> Self {
        self.contexts.insert(context);
        self
    }

    pub fn function_typed(mut self) -> Self {
        self.function_type = true;
        self
    }

    pub fn is_binding(&self) -> bool {
        self.contexts.iter().any(ContextInfo::is_binding)
    }

    pub fn merge(&mut self, other: &IdentifierDetails) {
        self.function_type |= other.function_type;
        self.contexts.extend(other.contexts.iter().copied());
    }
}

/// Per-occurrence reference map: every identifier with all spans it occurs at.
pub type RefMap = BTreeMap<Identifier, Vec<(Span, IdentifierDetails)>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub span: Span,
    pub identifiers: BTreeMap<Identifier, IdentifierDetails>,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            identifiers: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: Identifier, details: IdentifierDetails) -> Self {
        self.identifiers
            .entry(identifier)
            .or_default()
            .merge(&details);
        self
    }

    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    /// Collect every identifier occurrence in this subtree.
    ///
    /// Spans are listed in pre-order, so the map is identical for identical
    /// trees.
    pub fn ref_map(&self) -> RefMap {
        let mut refs = RefMap::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            for (identifier, details) in &node.identifiers {
                refs.entry(identifier.clone())
                    .or_default()
                    .push((node.span, details.clone()));
            }
            stack.extend(node.children.iter().rev());
        }
        refs
    }
}

/// The annotated AST of one compilation unit, one subtree per source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedAst {
    files: BTreeMap<String, AstNode>,
}

impl AnnotatedAst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, root: AstNode) -> Self {
        self.files.insert(path.into(), root);
        self
    }

    pub fn file(&self, path: &str) -> Option<&AstNode> {
        self.files.get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(occ: &str, unique: u64) -> Identifier {
        Identifier::Name(Name::local(occ, unique))
    }

    #[test]
    fn test_ref_map_collects_nested_occurrences_in_order() {
        let root = AstNode::new(Span::new(0, 0, 2, 0))
            .with_child(
                AstNode::new(Span::new(0, 0, 0, 3)).with_identifier(
                    name("foo", 1),
                    IdentifierDetails::new().with_context(ContextInfo::MatchBind),
                ),
            )
            .with_child(
                AstNode::new(Span::new(1, 0, 1, 10)).with_child(
                    AstNode::new(Span::new(1, 6, 1, 9)).with_identifier(
                        name("foo", 1),
                        IdentifierDetails::new().with_context(ContextInfo::Use),
                    ),
                ),
            );

        let refs = root.ref_map();
        let occurrences = refs.get(&name("foo", 1)).expect("foo should be collected");
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].0, Span::new(0, 0, 0, 3));
        assert_eq!(occurrences[1].0, Span::new(1, 6, 1, 9));
    }

    #[test]
    fn test_with_identifier_merges_details() {
        let node = AstNode::new(Span::new(0, 0, 0, 1))
            .with_identifier(name("x", 7), IdentifierDetails::new().with_context(ContextInfo::Use))
            .with_identifier(name("x", 7), IdentifierDetails::new().function_typed());

        let details = &node.identifiers[&name("x", 7)];
        assert!(details.function_type);
        assert!(details.contexts.contains(&ContextInfo::Use));
    }

    #[test]
    fn test_symbolic_names() {
        assert!(Name::local("<$>", 1).is_symbolic());
        assert!(Name::local(":|", 2).is_symbolic());
        assert!(!Name::local("map", 3).is_symbolic());
        assert!(!Name::local("_unused", 4).is_symbolic());
        assert!(!Name::local("", 5).is_symbolic());
    }

    #[test]
    fn test_binding_contexts() {
        assert!(!ContextInfo::Use.is_binding());
        assert!(!ContextInfo::Import.is_binding());
        assert!(ContextInfo::ValBind.is_binding());
        assert!(ContextInfo::Decl(DeclKind::Data).is_binding());
    }
}
