use crate::config::HooksConfig;
use crate::conflict::{Confirm, ConflictResolver, Decision};
use crate::error::{Error, Result};
use crate::fetch::{Fetch, FetchError};
use crate::registry::{Catalog, CatalogEntry, RegistryClient};
use fs_err as fs;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

pub const HOOK_EXTENSION: &str = "ts";
pub const DOCS_URL: &str = "https://github.com/azlanibrahim1/use-cli#readme";
const HOOK_DOCS_BASE: &str = "https://github.com/azlanibrahim1/use-cli/blob/main/src/hooks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    OverwriteDeclined,
    /// Another name in the batch was not in the registry, so nothing was attempted.
    BatchAborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Fetch(FetchError),
    Write(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Fetch(e) => write!(f, "download failed: {e}"),
            FailureReason::Write(e) => write!(f, "write failed: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Installed { path: PathBuf, overwritten: bool },
    Skipped(SkipReason),
    Failed(FailureReason),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub name: String,
    pub status: InstallStatus,
}

/// One outcome per requested name, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn outcomes(&self) -> &[InstallOutcome] {
        &self.outcomes
    }

    /// Names missing from the registry. Non-empty means nothing was written.
    pub fn unavailable_names(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| o.status == InstallStatus::Unavailable)
            .map(|o| o.name.clone())
            .collect()
    }

    pub fn installed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, InstallStatus::Installed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, InstallStatus::Failed(_)))
            .count()
    }

    /// Item-specific docs for a single request, the general page otherwise.
    pub fn documentation_url(&self) -> String {
        match self.outcomes.as_slice() {
            [only] => format!("{HOOK_DOCS_BASE}/{}.{HOOK_EXTENSION}", only.name),
            _ => DOCS_URL.to_string(),
        }
    }
}

pub fn hook_file_name(name: &str) -> String {
    format!("{name}.{HOOK_EXTENSION}")
}

pub struct Installer<'a, F, C> {
    registry: &'a RegistryClient<F>,
    resolver: &'a ConflictResolver<C>,
    destination: PathBuf,
    progress: Option<&'a ProgressBar>,
}

impl<'a, F: Fetch, C: Confirm> Installer<'a, F, C> {
    /// `root` is the directory a relative destination is resolved against.
    pub fn new(
        config: &HooksConfig,
        root: &Path,
        registry: &'a RegistryClient<F>,
        resolver: &'a ConflictResolver<C>,
    ) -> Self {
        Self {
            registry,
            resolver,
            destination: config.destination_dir(root),
            progress: None,
        }
    }

    pub fn with_progress(mut self, pb: &'a ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    /// Resolution is all-or-nothing: if any name is missing from the catalog
    /// no file is written. After that each hook succeeds or fails on its own.
    pub fn install<S: AsRef<str>>(&self, names: &[S]) -> Result<InstallReport> {
        if names.is_empty() {
            return Err(Error::EmptyRequest);
        }
        let catalog = self.registry.fetch_catalog()?;

        let mut resolved = Vec::with_capacity(names.len());
        let mut unavailable = Vec::new();
        for name in names {
            match catalog.find(name.as_ref()) {
                Some(entry) => resolved.push(entry),
                None => unavailable.push(name.as_ref()),
            }
        }
        if !unavailable.is_empty() {
            tracing::warn!(?unavailable, "requested hooks missing from registry, nothing installed");
            let outcomes = names
                .iter()
                .map(|n| {
                    let name = n.as_ref();
                    let status = if catalog.find(name).is_some() {
                        InstallStatus::Skipped(SkipReason::BatchAborted)
                    } else {
                        InstallStatus::Unavailable
                    };
                    InstallOutcome {
                        name: name.to_string(),
                        status,
                    }
                })
                .collect();
            return Ok(InstallReport { outcomes });
        }

        fs::create_dir_all(&self.destination).map_err(|source| Error::DestinationUnavailable {
            path: self.destination.clone(),
            source,
        })?;

        let outcomes = resolved
            .into_iter()
            .map(|entry| InstallOutcome {
                name: entry.name.clone(),
                status: self.install_one(&catalog, entry),
            })
            .collect();
        Ok(InstallReport { outcomes })
    }

    fn install_one(&self, catalog: &Catalog, entry: &CatalogEntry) -> InstallStatus {
        if !is_plain_file_name(&entry.name) {
            return InstallStatus::Failed(FailureReason::Write(format!(
                "'{}' is not a valid file name",
                entry.name
            )));
        }
        let path = self.destination.join(hook_file_name(&entry.name));
        let existed = path.exists();
        if existed && self.ask(&path) == Decision::Decline {
            tracing::debug!(hook = %entry.name, "overwrite declined");
            return InstallStatus::Skipped(SkipReason::OverwriteDeclined);
        }

        if let Some(pb) = self.progress {
            pb.set_message(format!("Fetching {}", entry.name));
        }
        let content = match self.registry.fetch_source(catalog, entry) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(hook = %entry.name, error = %e, "fetch failed");
                return InstallStatus::Failed(FailureReason::Fetch(e));
            }
        };
        if let Err(e) = fs::write(&path, &content) {
            tracing::warn!(hook = %entry.name, error = %e, "write failed");
            return InstallStatus::Failed(FailureReason::Write(e.to_string()));
        }
        tracing::info!(hook = %entry.name, path = %path.display(), bytes = content.len(), "installed");
        InstallStatus::Installed {
            path,
            overwritten: existed,
        }
    }

    fn ask(&self, path: &Path) -> Decision {
        match self.progress {
            Some(pb) => pb.suspend(|| self.resolver.resolve(path)),
            None => self.resolver.resolve(path),
        }
    }
}

// Catalog names become file names; anything that could escape the destination is refused.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
