use crate::config::HooksConfig;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::installer::hook_file_name;
use crate::registry::RegistryClient;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStatus {
    pub name: String,
    pub installed: bool,
}

pub struct Lister<'a, F> {
    registry: &'a RegistryClient<F>,
    destination: PathBuf,
}

impl<'a, F: Fetch> Lister<'a, F> {
    pub fn new(config: &HooksConfig, root: &Path, registry: &'a RegistryClient<F>) -> Self {
        Self {
            registry,
            destination: config.destination_dir(root),
        }
    }

    /// Catalog entries sorted by name, each flagged by whether its file is
    /// present under the destination. Read-only.
    pub fn list(&self) -> Result<Vec<HookStatus>> {
        let catalog = self.registry.fetch_catalog()?;
        let mut entries: Vec<_> = catalog.entries().iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries
            .into_iter()
            .map(|e| HookStatus {
                name: e.name.clone(),
                installed: self.destination.join(hook_file_name(&e.name)).is_file(),
            })
            .collect())
    }
}
