use crate::cli::{Cli, Commands};
use crate::command_handlers::{add, init, list, registry_client};
use anyhow::Result;
use use_cli::config::ConfigStore;
use use_cli::conflict::Policy;

pub fn dispatch(cli: &Cli, store: &ConfigStore) -> Result<()> {
    match &cli.command {
        // init must not go through load(), which would create the file it is about to write
        Commands::Init {
            destination,
            registry_url,
        } => init::run_init(store, destination.as_deref(), registry_url.as_deref()),
        Commands::Add {
            names,
            yes,
            no_overwrite,
        } => {
            let cfg = store.load()?;
            let root = store.root_dir();
            let registry = registry_client(cli, &cfg, &root)?;
            let policy = match (*yes, *no_overwrite) {
                (true, _) => Some(Policy::AlwaysProceed),
                (_, true) => Some(Policy::AlwaysDecline),
                _ => None,
            };
            add::run_add(add::AddArgs {
                names,
                policy,
                cfg: &cfg,
                root: &root,
                registry: &registry,
            })
        }
        Commands::List { installed } => {
            let cfg = store.load()?;
            let root = store.root_dir();
            let registry = registry_client(cli, &cfg, &root)?;
            list::run_list(&cfg, &root, &registry, *installed)
        }
    }
}
