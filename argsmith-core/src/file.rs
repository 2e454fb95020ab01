use std::path::Path;

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path
    fn path(&self) -> &Path;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the rendered content to its destination, verbatim
    fn write(&self) -> Result<()> {
        let path = self.path();
        write_file(path, &self.render())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
