use std::path::PathBuf;

use argsmith_schema::Schema;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the argument list (CSV with a header row)
    #[arg(long, value_name = "PATH")]
    pub argument_list: PathBuf,

    /// Print the parsed argument list as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.argument_list).unwrap_or_exit();
        let report = ops::check(&schema, &self.argument_list);

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
