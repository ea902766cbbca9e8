mod cli;
mod command_handlers;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use use_cli::config::{ConfigStore, CONFIG_FILE_NAME};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let store = ConfigStore::new(cli.config.clone().unwrap_or_else(|| CONFIG_FILE_NAME.into()));
    command_handlers::dispatch::dispatch(&cli, &store)
}

// Diagnostics go to stderr only; stdout carries the command output.
fn init_logging(verbose: bool) {
    let default = if verbose { "use_cli=debug" } else { "use_cli=warn" };
    let filter = EnvFilter::try_from_env("USE_CLI_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
