//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// One argument as seen by the check command.
#[derive(Debug, Serialize)]
pub struct ArgumentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_token: String,
    /// Declared Java type after fallback
    pub java_type: &'static str,
    /// Enabled validation clauses, in emission order
    pub checks: Vec<&'static str>,
}

/// Report data from argument list validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the argument list.
    pub path: PathBuf,
    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentInfo>,
    /// Lint warnings.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.success(&format!("{} is valid", self.path.display()));
        out.newline();

        let count = self.arguments.len();
        out.section(&format!(
            "{} argument{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for arg in &self.arguments {
            let mut line = format!("{}: {} -> {}", arg.name, arg.type_token, arg.java_type);
            if !arg.checks.is_empty() {
                line.push_str(&format!(" [{}]", arg.checks.join(", ")));
            }
            out.list_item(&line);
        }
    }
}
