use std::path::{Path, PathBuf};

use argsmith_codegen::PreviewFile;
use argsmith_core::GeneratedFile;

/// The generated argument-processor class, bound to its destination.
pub struct ProcessorFile {
    path: PathBuf,
    content: String,
}

impl ProcessorFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// View the file as a preview entry.
    pub fn preview(&self) -> PreviewFile {
        PreviewFile {
            path: self.path.display().to_string(),
            content: self.content.clone(),
        }
    }
}

impl GeneratedFile for ProcessorFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
