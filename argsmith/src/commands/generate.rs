use std::path::PathBuf;

use argsmith_codegen_java::{DEFAULT_CLASS_NAME, EmitOptions};
use argsmith_schema::Schema;
use clap::{Args, builder::NonEmptyStringValueParser};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the argument list (CSV with a header row)
    #[arg(long, value_name = "PATH")]
    pub argument_list: PathBuf,

    /// Path of the generated class file
    #[arg(long, value_name = "PATH")]
    pub class_file: PathBuf,

    /// Target language tag (e.g. java)
    #[arg(long, value_name = "LANGUAGE")]
    pub class_language: String,

    /// Literal separating an argument key from its value (e.g. =)
    #[arg(
        long,
        value_name = "SEPARATOR",
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub argument_value_separator: String,

    /// Name of the generated class
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Print the generated class without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Do not echo the generated class to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.argument_list).unwrap_or_exit();
        tracing::debug!(
            path = %self.argument_list.display(),
            arguments = schema.len(),
            "read argument list"
        );

        let options = EmitOptions::new(&self.class_language, &self.argument_value_separator)
            .with_class_name(&self.class_name);
        let mut report = ops::generate(&schema, options, &self.class_file, self.dry_run)?;
        report.echo = !self.quiet;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
