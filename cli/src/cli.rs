use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "use-cli",
    about = "A CLI tool for copying React hooks into your project"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config (defaults to ./hooks.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Registry URL or local path, overriding `registryUrl` in the config
    #[arg(long, global = true, value_name = "URL")]
    pub registry: Option<String>,

    /// Network timeout in seconds for every registry and hook fetch
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file for your hooks
    Init {
        /// Installation path for hooks; prompts when omitted
        #[arg(long, value_name = "PATH")]
        destination: Option<PathBuf>,
        /// Registry override to record in the new config
        #[arg(long, value_name = "URL")]
        registry_url: Option<String>,
    },
    /// Copy one or more hooks into the configured destination.
    /// Examples:
    ///   use-cli add useDebounce
    ///   use-cli add useDebounce useWindowSize --yes
    Add {
        /// Hook names exactly as listed by `use-cli list`
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
        /// Overwrite existing files without asking
        #[arg(short, long, conflicts_with = "no_overwrite")]
        yes: bool,
        /// Never overwrite existing files and never ask
        #[arg(long)]
        no_overwrite: bool,
    },
    /// Show available hooks and whether each is installed
    List {
        /// Only show hooks already present in the destination
        #[arg(long)]
        installed: bool,
    },
}
