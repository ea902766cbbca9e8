use crate::prompt;
use anyhow::Result;
use console::style;
use std::path::Path;
use use_cli::config::{ConfigStore, HooksConfig, InitOutcome, DEFAULT_DESTINATION};

pub fn run_init(
    store: &ConfigStore,
    destination: Option<&Path>,
    registry_url: Option<&str>,
) -> Result<()> {
    if store.exists() {
        already_exists(store);
        return Ok(());
    }
    let destination = match destination {
        Some(d) => d.to_string_lossy().into_owned(),
        None => prompt::ask_destination().unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
    };
    let mut cfg = HooksConfig::new(destination);
    if let Some(url) = registry_url {
        cfg = cfg.with_registry_url(url);
    }
    match store.initialize(&cfg)? {
        InitOutcome::Created => println!(
            "{}",
            style(format!("Configuration saved to {}", store.path().display())).green()
        ),
        InitOutcome::AlreadyExists => already_exists(store),
    }
    Ok(())
}

fn already_exists(store: &ConfigStore) {
    println!(
        "{}",
        style(format!(
            "Config file '{}' already exists. No changes made.",
            store.path().display()
        ))
        .yellow()
    );
}
