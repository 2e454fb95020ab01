mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

/// Exit status for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 1;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(err) => err.exit(),
    };

    init_tracing(cli.verbose);
    cli.run()
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "argsmith=debug"
    } else {
        "argsmith=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
