use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::analysis::TokenKind;

/// Which LSP token type each token kind is reported as.
///
/// Values are LSP token type names (`"function"`, `"enumMember"`, ...). Any
/// field missing from the client's JSON keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokensConfig {
    #[serde(default = "defaults::function_token")]
    pub function_token: String,
    #[serde(default = "defaults::variable_token")]
    pub variable_token: String,
    #[serde(default = "defaults::data_constructor_token")]
    pub data_constructor_token: String,
    #[serde(default = "defaults::type_variable_token")]
    pub type_variable_token: String,
    #[serde(default = "defaults::class_method_token")]
    pub class_method_token: String,
    #[serde(default = "defaults::pattern_synonym_token")]
    pub pattern_synonym_token: String,
    #[serde(default = "defaults::type_constructor_token")]
    pub type_constructor_token: String,
    #[serde(default = "defaults::class_token")]
    pub class_token: String,
    #[serde(default = "defaults::type_synonym_token")]
    pub type_synonym_token: String,
    #[serde(default = "defaults::type_family_token")]
    pub type_family_token: String,
    #[serde(default = "defaults::record_field_token")]
    pub record_field_token: String,
    #[serde(default = "defaults::operator_token")]
    pub operator_token: String,
    #[serde(default = "defaults::module_token")]
    pub module_token: String,
    /// Modules whose names get the `defaultLibrary` modifier.
    #[serde(default)]
    pub default_library_modules: Vec<String>,
}

impl Default for SemanticTokensConfig {
    fn default() -> Self {
        Self {
            function_token: defaults::function_token(),
            variable_token: defaults::variable_token(),
            data_constructor_token: defaults::data_constructor_token(),
            type_variable_token: defaults::type_variable_token(),
            class_method_token: defaults::class_method_token(),
            pattern_synonym_token: defaults::pattern_synonym_token(),
            type_constructor_token: defaults::type_constructor_token(),
            class_token: defaults::class_token(),
            type_synonym_token: defaults::type_synonym_token(),
            type_family_token: defaults::type_family_token(),
            record_field_token: defaults::record_field_token(),
            operator_token: defaults::operator_token(),
            module_token: defaults::module_token(),
            default_library_modules: Vec::new(),
        }
    }
}

impl SemanticTokensConfig {
    /// The configured LSP token type name for a kind.
    pub fn lsp_type_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Function => &self.function_token,
            TokenKind::Variable => &self.variable_token,
            TokenKind::DataConstructor => &self.data_constructor_token,
            TokenKind::TypeVariable => &self.type_variable_token,
            TokenKind::ClassMethod => &self.class_method_token,
            TokenKind::PatternSynonym => &self.pattern_synonym_token,
            TokenKind::TypeConstructor => &self.type_constructor_token,
            TokenKind::Class => &self.class_token,
            TokenKind::TypeSynonym => &self.type_synonym_token,
            TokenKind::TypeFamily => &self.type_family_token,
            TokenKind::RecordField => &self.record_field_token,
            TokenKind::Operator => &self.operator_token,
            TokenKind::Module => &self.module_token,
        }
    }

    /// The built-in LSP token type name for a kind.
    pub fn default_lsp_type_for(kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Function => defaults::DEFAULT_FUNCTION_TOKEN,
            TokenKind::Variable => defaults::DEFAULT_VARIABLE_TOKEN,
            TokenKind::DataConstructor => defaults::DEFAULT_DATA_CONSTRUCTOR_TOKEN,
            TokenKind::TypeVariable => defaults::DEFAULT_TYPE_VARIABLE_TOKEN,
            TokenKind::ClassMethod => defaults::DEFAULT_CLASS_METHOD_TOKEN,
            TokenKind::PatternSynonym => defaults::DEFAULT_PATTERN_SYNONYM_TOKEN,
            TokenKind::TypeConstructor => defaults::DEFAULT_TYPE_CONSTRUCTOR_TOKEN,
            TokenKind::Class => defaults::DEFAULT_CLASS_TOKEN,
            TokenKind::TypeSynonym => defaults::DEFAULT_TYPE_SYNONYM_TOKEN,
            TokenKind::TypeFamily => defaults::DEFAULT_TYPE_FAMILY_TOKEN,
            TokenKind::RecordField => defaults::DEFAULT_RECORD_FIELD_TOKEN,
            TokenKind::Operator => defaults::DEFAULT_OPERATOR_TOKEN,
            TokenKind::Module => defaults::DEFAULT_MODULE_TOKEN,
        }
    }
}

/// Server settings as sent in `initializationOptions` or
/// `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    #[serde(default)]
    pub semantic_tokens: SemanticTokensConfig,
}

impl WorkspaceSettings {
    /// Parse settings from a client JSON payload.
    ///
    /// Clients commonly nest settings under the server name, so both
    /// `{"semanticTokens": ...}` and `{"hieroglyph": {"semanticTokens": ...}}`
    /// are accepted.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let value = value.get("hieroglyph").unwrap_or(value);
        // serde would read a JSON array as a struct sequence, and with every
        // field defaulted an empty array would pass as the default config.
        if !value.is_object() {
            return Err(serde_json::Error::custom("settings must be a JSON object"));
        }
        if value
            .get("semanticTokens")
            .is_some_and(|tokens| !tokens.is_object())
        {
            return Err(serde_json::Error::custom(
                "semanticTokens must be a JSON object",
            ));
        }
        serde_json::from_value(value.clone())
    }
}
