pub mod add;
pub mod dispatch;
pub mod init;
pub mod list;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use use_cli::config::HooksConfig;
use use_cli::fetch::HttpFetcher;
use use_cli::registry::{resolve_registry_url, RegistryClient, DEFAULT_REGISTRY_URL};

use crate::cli::Cli;

/// Registry from `--registry`, then the config's `registryUrl`, then the built-in default.
/// A path given on the command line is relative to the working directory; one
/// from the config is relative to the config file.
pub fn registry_client(
    cli: &Cli,
    cfg: &HooksConfig,
    root: &Path,
) -> Result<RegistryClient<HttpFetcher>> {
    let url = match (&cli.registry, &cfg.registry_url) {
        (Some(flag), _) => resolve_registry_url(flag, Path::new("."))?,
        (None, Some(configured)) => resolve_registry_url(configured, root)?,
        (None, None) => resolve_registry_url(DEFAULT_REGISTRY_URL, root)?,
    };
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))?;
    Ok(RegistryClient::new(fetcher, url))
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
