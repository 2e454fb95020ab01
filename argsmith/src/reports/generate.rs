//! Generate command report data structures.

use argsmith_codegen_java::PreviewFile;

use super::output::{Output, Report};

/// Report data from class generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// The rendered class and its destination.
    pub file: PreviewFile,
    /// Number of arguments emitted.
    pub arguments: usize,
    /// Whether the file was written to disk.
    pub written: bool,
    /// Whether to echo the class source.
    pub echo: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.echo {
            out.divider(&self.file.path);
            out.raw(&self.file.content);
            out.newline();
        }

        let plural = if self.arguments == 1 { "" } else { "s" };
        if self.written {
            out.success(&format!(
                "Generated {} ({} argument{})",
                self.file.path, self.arguments, plural
            ));
        } else {
            out.info(&format!(
                "Dry run: {} not written ({} argument{})",
                self.file.path, self.arguments, plural
            ));
        }
    }
}
