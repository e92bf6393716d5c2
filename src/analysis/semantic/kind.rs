//! Token kinds and the classifier that assigns them to names.

use crate::artifacts::{ContextInfo, DeclKind, Entity, IdentifierDetails, TyConFlavour};

/// Semantic classification of a name occurrence.
///
/// Variants are declared in precedence order: when one name carries several
/// classifications, the later variant wins (a record field that is also a
/// function is a record field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Variable,
    Function,
    DataConstructor,
    TypeVariable,
    ClassMethod,
    PatternSynonym,
    TypeConstructor,
    Class,
    TypeSynonym,
    TypeFamily,
    RecordField,
    Operator,
    Module,
}

impl TokenKind {
    pub const COUNT: usize = 13;

    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Variable,
        TokenKind::Function,
        TokenKind::DataConstructor,
        TokenKind::TypeVariable,
        TokenKind::ClassMethod,
        TokenKind::PatternSynonym,
        TokenKind::TypeConstructor,
        TokenKind::Class,
        TokenKind::TypeSynonym,
        TokenKind::TypeFamily,
        TokenKind::RecordField,
        TokenKind::Operator,
        TokenKind::Module,
    ];

    /// Combine two classifications of the same name.
    pub fn merge(self, other: TokenKind) -> TokenKind {
        self.max(other)
    }

    /// Operators are reported as such regardless of whether they resolve to
    /// a plain binding, a function or a class method.
    fn for_symbolic_name(self) -> TokenKind {
        match self {
            TokenKind::Variable | TokenKind::Function | TokenKind::ClassMethod => {
                TokenKind::Operator
            }
            other => other,
        }
    }
}

/// Token modifiers orthogonal to the kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenModifiers {
    bits: u8,
}

impl TokenModifiers {
    pub const NONE: TokenModifiers = TokenModifiers { bits: 0 };
    /// The occurrence binds the name.
    pub const DECLARATION: TokenModifiers = TokenModifiers { bits: 1 };
    /// The name comes from a module configured as a default library.
    pub const DEFAULT_LIBRARY: TokenModifiers = TokenModifiers { bits: 1 << 1 };

    pub fn union(self, other: TokenModifiers) -> TokenModifiers {
        TokenModifiers {
            bits: self.bits | other.bits,
        }
    }

    pub fn contains(self, other: TokenModifiers) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
}

fn context_kind(context: &ContextInfo) -> Option<TokenKind> {
    match context {
        ContextInfo::Decl(DeclKind::Class) => Some(TokenKind::Class),
        ContextInfo::Decl(DeclKind::Data) => Some(TokenKind::TypeConstructor),
        ContextInfo::Decl(DeclKind::Con) => Some(TokenKind::DataConstructor),
        ContextInfo::Decl(DeclKind::Synonym) => Some(TokenKind::TypeSynonym),
        ContextInfo::Decl(DeclKind::Family) => Some(TokenKind::TypeFamily),
        ContextInfo::Decl(DeclKind::PatSyn) => Some(TokenKind::PatternSynonym),
        ContextInfo::ClassTyDecl => Some(TokenKind::ClassMethod),
        ContextInfo::RecField => Some(TokenKind::RecordField),
        ContextInfo::TyVarBind => Some(TokenKind::TypeVariable),
        ContextInfo::ValBind | ContextInfo::PatternBind => Some(TokenKind::Variable),
        ContextInfo::MatchBind => Some(TokenKind::Function),
        ContextInfo::Decl(DeclKind::Instance)
        | ContextInfo::Use
        | ContextInfo::Import
        | ContextInfo::Export => None,
    }
}

/// Classify a name from the binding sites recorded in the file's AST.
///
/// `details` should already be merged across every occurrence of the name,
/// so a use site gets the kind of its binder. Returns `None` when no
/// occurrence binds the name.
pub fn classify_local(details: &IdentifierDetails) -> Option<TokenKind> {
    let kind = details
        .contexts
        .iter()
        .filter_map(context_kind)
        .reduce(TokenKind::merge)?;
    if kind == TokenKind::Variable && details.function_type {
        Some(TokenKind::Function)
    } else {
        Some(kind)
    }
}

/// Classify a name from its defining entity in the name map.
pub fn classify_entity(entity: Entity) -> TokenKind {
    match entity {
        Entity::Id {
            record_selector: true,
            ..
        } => TokenKind::RecordField,
        Entity::Id {
            class_method: true, ..
        } => TokenKind::ClassMethod,
        Entity::Id {
            function_type: true,
            ..
        } => TokenKind::Function,
        Entity::Id { .. } => TokenKind::Variable,
        Entity::DataCon => TokenKind::DataConstructor,
        Entity::PatSyn => TokenKind::PatternSynonym,
        Entity::TyCon(TyConFlavour::Data) => TokenKind::TypeConstructor,
        Entity::TyCon(TyConFlavour::Class) => TokenKind::Class,
        Entity::TyCon(TyConFlavour::Synonym) => TokenKind::TypeSynonym,
        Entity::TyCon(TyConFlavour::Family) => TokenKind::TypeFamily,
    }
}

/// Full classification of a value- or type-level name.
///
/// Local binding information wins over the name map; names found in
/// neither fall back to `Variable`.
pub fn classify_name(
    local: Option<&IdentifierDetails>,
    entity: Option<Entity>,
    symbolic: bool,
) -> TokenKind {
    let kind = local
        .and_then(classify_local)
        .or_else(|| entity.map(classify_entity))
        .unwrap_or(TokenKind::Variable);
    if symbolic {
        kind.for_symbolic_name()
    } else {
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::class(ContextInfo::Decl(DeclKind::Class), Some(TokenKind::Class))]
    #[case::data(ContextInfo::Decl(DeclKind::Data), Some(TokenKind::TypeConstructor))]
    #[case::con(ContextInfo::Decl(DeclKind::Con), Some(TokenKind::DataConstructor))]
    #[case::synonym(ContextInfo::Decl(DeclKind::Synonym), Some(TokenKind::TypeSynonym))]
    #[case::family(ContextInfo::Decl(DeclKind::Family), Some(TokenKind::TypeFamily))]
    #[case::pat_syn(ContextInfo::Decl(DeclKind::PatSyn), Some(TokenKind::PatternSynonym))]
    #[case::class_method(ContextInfo::ClassTyDecl, Some(TokenKind::ClassMethod))]
    #[case::record_field(ContextInfo::RecField, Some(TokenKind::RecordField))]
    #[case::ty_var(ContextInfo::TyVarBind, Some(TokenKind::TypeVariable))]
    #[case::val_bind(ContextInfo::ValBind, Some(TokenKind::Variable))]
    #[case::pattern_bind(ContextInfo::PatternBind, Some(TokenKind::Variable))]
    #[case::match_bind(ContextInfo::MatchBind, Some(TokenKind::Function))]
    #[case::instance(ContextInfo::Decl(DeclKind::Instance), None)]
    #[case::use_site(ContextInfo::Use, None)]
    fn test_classify_local_single_context(
        #[case] context: ContextInfo,
        #[case] expected: Option<TokenKind>,
    ) {
        let details = IdentifierDetails::new().with_context(context);
        assert_eq!(classify_local(&details), expected);
    }

    #[test]
    fn test_function_typed_variable_is_function() {
        let details = IdentifierDetails::new()
            .with_context(ContextInfo::ValBind)
            .function_typed();
        assert_eq!(classify_local(&details), Some(TokenKind::Function));
    }

    #[test]
    fn test_function_type_does_not_demote_stronger_kinds() {
        let details = IdentifierDetails::new()
            .with_context(ContextInfo::RecField)
            .function_typed();
        assert_eq!(classify_local(&details), Some(TokenKind::RecordField));
    }

    #[test]
    fn test_ties_broken_by_precedence() {
        // A record field is also bound as a function: the field wins.
        let details = IdentifierDetails::new()
            .with_context(ContextInfo::MatchBind)
            .with_context(ContextInfo::RecField);
        assert_eq!(classify_local(&details), Some(TokenKind::RecordField));
        assert_eq!(
            TokenKind::Function.merge(TokenKind::RecordField),
            TokenKind::RecordField
        );
        assert_eq!(
            TokenKind::RecordField.merge(TokenKind::Function),
            TokenKind::RecordField
        );
    }

    #[rstest]
    #[case::plain_value(Entity::value(), TokenKind::Variable)]
    #[case::function(Entity::function(), TokenKind::Function)]
    #[case::class_method(
        Entity::Id { function_type: true, class_method: true, record_selector: false },
        TokenKind::ClassMethod
    )]
    #[case::record_selector(
        Entity::Id { function_type: true, class_method: false, record_selector: true },
        TokenKind::RecordField
    )]
    #[case::data_con(Entity::DataCon, TokenKind::DataConstructor)]
    #[case::pat_syn(Entity::PatSyn, TokenKind::PatternSynonym)]
    #[case::tycon(Entity::TyCon(TyConFlavour::Data), TokenKind::TypeConstructor)]
    #[case::class(Entity::TyCon(TyConFlavour::Class), TokenKind::Class)]
    #[case::synonym(Entity::TyCon(TyConFlavour::Synonym), TokenKind::TypeSynonym)]
    #[case::family(Entity::TyCon(TyConFlavour::Family), TokenKind::TypeFamily)]
    fn test_classify_entity(#[case] entity: Entity, #[case] expected: TokenKind) {
        assert_eq!(classify_entity(entity), expected);
    }

    #[test]
    fn test_local_binding_wins_over_name_map() {
        let details = IdentifierDetails::new().with_context(ContextInfo::ValBind);
        let kind = classify_name(Some(&details), Some(Entity::DataCon), false);
        assert_eq!(kind, TokenKind::Variable);
    }

    #[test]
    fn test_use_only_occurrence_falls_through_to_name_map() {
        let details = IdentifierDetails::new().with_context(ContextInfo::Use);
        let kind = classify_name(Some(&details), Some(Entity::function()), false);
        assert_eq!(kind, TokenKind::Function);
    }

    #[test]
    fn test_unresolved_name_falls_back_to_variable() {
        assert_eq!(classify_name(None, None, false), TokenKind::Variable);
    }

    #[rstest]
    #[case::variable(Entity::value(), TokenKind::Operator)]
    #[case::function(Entity::function(), TokenKind::Operator)]
    #[case::data_con(Entity::DataCon, TokenKind::DataConstructor)]
    #[case::type_operator(Entity::TyCon(TyConFlavour::Data), TokenKind::TypeConstructor)]
    fn test_symbolic_names(#[case] entity: Entity, #[case] expected: TokenKind) {
        assert_eq!(classify_name(None, Some(entity), true), expected);
    }

    #[test]
    fn test_modifiers_union() {
        let both = TokenModifiers::DECLARATION.union(TokenModifiers::DEFAULT_LIBRARY);
        assert!(both.contains(TokenModifiers::DECLARATION));
        assert!(both.contains(TokenModifiers::DEFAULT_LIBRARY));
        assert!(!TokenModifiers::DECLARATION.contains(TokenModifiers::DEFAULT_LIBRARY));
        assert!(TokenModifiers::NONE.is_empty());
    }
}
