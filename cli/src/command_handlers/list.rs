use crate::command_handlers::spinner;
use anyhow::Result;
use console::style;
use std::path::Path;
use use_cli::config::HooksConfig;
use use_cli::fetch::HttpFetcher;
use use_cli::lister::Lister;
use use_cli::registry::RegistryClient;

pub fn run_list(
    cfg: &HooksConfig,
    root: &Path,
    registry: &RegistryClient<HttpFetcher>,
    installed_only: bool,
) -> Result<()> {
    let pb = spinner("Fetching registry");
    let result = Lister::new(cfg, root, registry).list();
    pb.finish_and_clear();
    let hooks = result?;

    if hooks.is_empty() {
        println!("No hooks available from {}", registry.url());
        return Ok(());
    }
    for hook in hooks.iter().filter(|h| h.installed || !installed_only) {
        if hook.installed {
            println!("{} {}", style("✔").green(), hook.name);
        } else {
            println!("{} {}", style("✘").dim(), hook.name);
        }
    }
    Ok(())
}
