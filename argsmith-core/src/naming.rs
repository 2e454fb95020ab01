//! Identifier derivation for generated accessors.

use thiserror::Error;

/// Errors raised while deriving identifiers from argument names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("argument name is empty")]
    Empty,
}

/// Whether `name` can be used as a Java identifier: a letter, `_` or `$`
/// followed by letters, digits, `_` or `$`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    }
}

/// Derive the accessor suffix for an argument name.
///
/// The first character is uppercased and the rest is kept as is, so
/// `inputFile` becomes `InputFile` (and `setInputFile`/`getInputFile`).
pub fn accessor_suffix(name: &str) -> Result<String, NameError> {
    let mut chars = name.chars();
    match chars.next() {
        None => Err(NameError::Empty),
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
    }
}
