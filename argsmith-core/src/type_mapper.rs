//! Type mapping between schema type tokens and language-specific types.

/// Semantic argument types understood by the generator.
///
/// This is a language-agnostic representation of the free-text `type`
/// column. Tokens that match none of the known names resolve to
/// [`ArgType::Other`], so parsing a token never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    File,
    Path,
    Flag,
    Other,
}

impl ArgType {
    /// Resolve a type token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "string" => ArgType::String,
            "file" => ArgType::File,
            "path" => ArgType::Path,
            "flag" => ArgType::Flag,
            _ => ArgType::Other,
        }
    }

    /// Whether values of this type name something on the filesystem.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, ArgType::File | ArgType::Path)
    }

    /// Whether this type came from an unrecognized token.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ArgType::Other)
    }
}

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map an argument type to a language-specific type string
    fn map_arg_type(&self, arg_type: ArgType) -> &'static str;

    /// Map a raw type token. Unknown tokens use the fallback type.
    fn map_token(&self, token: &str) -> &'static str {
        self.map_arg_type(ArgType::from_token(token))
    }

    /// Expression converting the raw text held in `value` into the mapped type.
    fn convert_expr(&self, arg_type: ArgType, value: &str) -> String;
}
