//! Semantic token legend and kind-to-legend mapping.
//!
//! The legend advertised to the client is the full set of standard LSP token
//! types, so a configuration change can remap kinds without renegotiating
//! capabilities.

use std::collections::HashSet;

use tower_lsp_server::ls_types::{SemanticTokenModifier, SemanticTokenType};

use super::kind::{TokenKind, TokenModifiers};
use super::token_collector::RangedSemanticToken;
use crate::config::SemanticTokensConfig;

/// Semantic token types supported by the LSP legend.
pub const LEGEND_TYPES: &[SemanticTokenType] = &[
    SemanticTokenType::COMMENT,
    SemanticTokenType::KEYWORD,
    SemanticTokenType::STRING,
    SemanticTokenType::NUMBER,
    SemanticTokenType::REGEXP,
    SemanticTokenType::OPERATOR,
    SemanticTokenType::NAMESPACE,
    SemanticTokenType::TYPE,
    SemanticTokenType::STRUCT,
    SemanticTokenType::CLASS,
    SemanticTokenType::INTERFACE,
    SemanticTokenType::ENUM,
    SemanticTokenType::ENUM_MEMBER,
    SemanticTokenType::TYPE_PARAMETER,
    SemanticTokenType::FUNCTION,
    SemanticTokenType::METHOD,
    SemanticTokenType::MACRO,
    SemanticTokenType::VARIABLE,
    SemanticTokenType::PARAMETER,
    SemanticTokenType::PROPERTY,
    SemanticTokenType::EVENT,
    SemanticTokenType::MODIFIER,
    SemanticTokenType::DECORATOR,
];

/// Semantic token modifiers supported by the LSP legend.
pub const LEGEND_MODIFIERS: &[SemanticTokenModifier] = &[
    SemanticTokenModifier::DECLARATION,
    SemanticTokenModifier::DEFINITION,
    SemanticTokenModifier::READONLY,
    SemanticTokenModifier::STATIC,
    SemanticTokenModifier::DEPRECATED,
    SemanticTokenModifier::ABSTRACT,
    SemanticTokenModifier::ASYNC,
    SemanticTokenModifier::MODIFICATION,
    SemanticTokenModifier::DOCUMENTATION,
    SemanticTokenModifier::DEFAULT_LIBRARY,
];

/// Index of an LSP token type name in `LEGEND_TYPES`.
pub fn legend_type_index(name: &str) -> Option<u32> {
    LEGEND_TYPES
        .iter()
        .position(|t| t.as_str() == name)
        .map(|index| index as u32)
}

fn legend_modifier_bit(modifier: &SemanticTokenModifier) -> u32 {
    LEGEND_MODIFIERS
        .iter()
        .position(|m| m == modifier)
        .map(|index| 1 << index)
        .unwrap_or(0)
}

/// Configuration resolved against the legend, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEncoding {
    type_indices: [u32; TokenKind::COUNT],
    default_library: HashSet<String>,
}

impl TokenEncoding {
    /// Resolve a configuration.
    ///
    /// Type names missing from the legend fall back to the kind's default.
    pub fn from_config(config: &SemanticTokensConfig) -> Self {
        let mut type_indices = [0; TokenKind::COUNT];
        for kind in TokenKind::ALL {
            let configured = config.lsp_type_for(kind);
            let index = legend_type_index(configured).unwrap_or_else(|| {
                let fallback = SemanticTokensConfig::default_lsp_type_for(kind);
                log::warn!(
                    target: "hieroglyph::semantic",
                    "Unknown semantic token type {:?} configured for {:?}, using {:?}",
                    configured,
                    kind,
                    fallback
                );
                legend_type_index(fallback).unwrap_or(0)
            });
            type_indices[kind as usize] = index;
        }
        Self {
            type_indices,
            default_library: config.default_library_modules.iter().cloned().collect(),
        }
    }

    pub fn type_index(&self, kind: TokenKind) -> u32 {
        self.type_indices[kind as usize]
    }

    /// LSP modifier bitset for a token.
    pub fn modifier_bitset(&self, token: &RangedSemanticToken) -> u32 {
        let mut modifiers = token.modifiers;
        if token
            .module
            .as_ref()
            .is_some_and(|module| self.default_library.contains(module.as_str()))
        {
            modifiers = modifiers.union(TokenModifiers::DEFAULT_LIBRARY);
        }

        let mut bitset = 0;
        if modifiers.contains(TokenModifiers::DECLARATION) {
            bitset |= legend_modifier_bit(&SemanticTokenModifier::DECLARATION);
        }
        if modifiers.contains(TokenModifiers::DEFAULT_LIBRARY) {
            bitset |= legend_modifier_bit(&SemanticTokenModifier::DEFAULT_LIBRARY);
        }
        bitset
    }
}

impl Default for TokenEncoding {
    fn default() -> Self {
        Self::from_config(&SemanticTokensConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ModuleName;

    fn token(modifiers: TokenModifiers, module: Option<&str>) -> RangedSemanticToken {
        RangedSemanticToken {
            line: 0,
            start: 0,
            length: 1,
            kind: TokenKind::Variable,
            modifiers,
            module: module.map(ModuleName::new),
        }
    }

    #[test]
    fn test_legend_types_includes_function() {
        assert_eq!(legend_type_index("function"), Some(14));
        assert_eq!(legend_type_index("unknown"), None);
    }

    #[test]
    fn test_default_encoding_uses_default_types() {
        let encoding = TokenEncoding::default();
        for kind in TokenKind::ALL {
            let expected = legend_type_index(SemanticTokensConfig::default_lsp_type_for(kind));
            assert_eq!(Some(encoding.type_index(kind)), expected, "{:?}", kind);
        }
    }

    #[test]
    fn test_configured_type_is_used() {
        let config = SemanticTokensConfig {
            function_token: "method".to_string(),
            ..Default::default()
        };
        let encoding = TokenEncoding::from_config(&config);
        assert_eq!(
            encoding.type_index(TokenKind::Function),
            legend_type_index("method").unwrap()
        );
    }

    #[test]
    fn test_unknown_configured_type_falls_back() {
        let config = SemanticTokensConfig {
            class_token: "not-a-token-type".to_string(),
            ..Default::default()
        };
        let encoding = TokenEncoding::from_config(&config);
        assert_eq!(
            encoding.type_index(TokenKind::Class),
            legend_type_index("class").unwrap()
        );
    }

    #[test]
    fn test_modifier_bitset() {
        let config = SemanticTokensConfig {
            default_library_modules: vec!["Prelude".to_string()],
            ..Default::default()
        };
        let encoding = TokenEncoding::from_config(&config);

        assert_eq!(encoding.modifier_bitset(&token(TokenModifiers::NONE, None)), 0);
        assert_eq!(
            encoding.modifier_bitset(&token(TokenModifiers::DECLARATION, None)),
            1 << 0
        );
        assert_eq!(
            encoding.modifier_bitset(&token(TokenModifiers::NONE, Some("Prelude"))),
            1 << 9
        );
        assert_eq!(
            encoding.modifier_bitset(&token(TokenModifiers::DECLARATION, Some("Data.Map"))),
            1 << 0
        );
    }
}
