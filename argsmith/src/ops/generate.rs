//! Generate operation - class emission and writing.

use std::path::Path;

use argsmith_codegen_java::{EmitOptions, Generator, LanguageCodegen};
use argsmith_schema::Schema;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Renders the class for `schema` and, unless `dry_run` is set, writes it
/// to `output`. Nothing is written if rendering fails.
pub fn generate(
    schema: &Schema,
    options: EmitOptions,
    output: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    let generator = Generator::new(schema, options);

    let file = if dry_run {
        generator.preview(output)?
    } else {
        generator
            .generate(output)
            .wrap_err("Failed to generate code")?
    };

    Ok(GenerateReport {
        file,
        arguments: schema.len(),
        written: !dry_run,
        echo: true,
    })
}
