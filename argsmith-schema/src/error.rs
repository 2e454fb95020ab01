use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for argument list operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the raw argument list and its filename so row errors can point
/// at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a malformed row error pointing at `span`.
    pub fn malformed_row(
        &self,
        line: usize,
        row: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MalformedRow {
            src: self.named_source(),
            span: span.into(),
            line,
            row: row.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(argsmith::io),
        help("pass the argument list with --argument-list <path>")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: {reason}")]
    #[diagnostic(
        code(argsmith::malformed_row),
        help(
            "each row needs exactly six columns: name, type, isMandatory, checkExisting, checkReadAccess, checkWriteAccess"
        )
    )]
    MalformedRow {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        line: usize,
        row: String,
        reason: String,
    },
}
