//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting the argument
/// processor in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Render the generated unit destined for `output` without writing it
    fn preview(&self, output: &Path) -> Result<PreviewFile>;

    /// Render the generated unit and write it to `output`
    fn generate(&self, output: &Path) -> Result<PreviewFile>;
}

/// A rendered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Destination path
    pub path: String,
    /// File content
    pub content: String,
}
