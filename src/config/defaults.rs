//! Default configuration values for hieroglyph.
//!
//! Each token kind maps to a standard LSP token type so that themes without
//! language-specific rules still colour every kind.

pub const DEFAULT_FUNCTION_TOKEN: &str = "function";
pub const DEFAULT_VARIABLE_TOKEN: &str = "variable";
pub const DEFAULT_DATA_CONSTRUCTOR_TOKEN: &str = "enumMember";
pub const DEFAULT_TYPE_VARIABLE_TOKEN: &str = "typeParameter";
pub const DEFAULT_CLASS_METHOD_TOKEN: &str = "method";
pub const DEFAULT_PATTERN_SYNONYM_TOKEN: &str = "macro";
pub const DEFAULT_TYPE_CONSTRUCTOR_TOKEN: &str = "enum";
pub const DEFAULT_CLASS_TOKEN: &str = "class";
pub const DEFAULT_TYPE_SYNONYM_TOKEN: &str = "type";
pub const DEFAULT_TYPE_FAMILY_TOKEN: &str = "interface";
pub const DEFAULT_RECORD_FIELD_TOKEN: &str = "property";
pub const DEFAULT_OPERATOR_TOKEN: &str = "operator";
pub const DEFAULT_MODULE_TOKEN: &str = "namespace";

pub(crate) fn function_token() -> String {
    DEFAULT_FUNCTION_TOKEN.to_string()
}

pub(crate) fn variable_token() -> String {
    DEFAULT_VARIABLE_TOKEN.to_string()
}

pub(crate) fn data_constructor_token() -> String {
    DEFAULT_DATA_CONSTRUCTOR_TOKEN.to_string()
}

pub(crate) fn type_variable_token() -> String {
    DEFAULT_TYPE_VARIABLE_TOKEN.to_string()
}

pub(crate) fn class_method_token() -> String {
    DEFAULT_CLASS_METHOD_TOKEN.to_string()
}

pub(crate) fn pattern_synonym_token() -> String {
    DEFAULT_PATTERN_SYNONYM_TOKEN.to_string()
}

pub(crate) fn type_constructor_token() -> String {
    DEFAULT_TYPE_CONSTRUCTOR_TOKEN.to_string()
}

pub(crate) fn class_token() -> String {
    DEFAULT_CLASS_TOKEN.to_string()
}

pub(crate) fn type_synonym_token() -> String {
    DEFAULT_TYPE_SYNONYM_TOKEN.to_string()
}

pub(crate) fn type_family_token() -> String {
    DEFAULT_TYPE_FAMILY_TOKEN.to_string()
}

pub(crate) fn record_field_token() -> String {
    DEFAULT_RECORD_FIELD_TOKEN.to_string()
}

pub(crate) fn operator_token() -> String {
    DEFAULT_OPERATOR_TOKEN.to_string()
}

pub(crate) fn module_token() -> String {
    DEFAULT_MODULE_TOKEN.to_string()
}
