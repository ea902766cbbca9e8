use crate::error::{Error, Result};
use crate::fetch::{Fetch, FetchError};
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_REGISTRY_URL: &str =
    "https://cdn.jsdelivr.net/gh/azlanibrahim1/use-cli@main/registry.json";

/// One installable hook as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Absolute URL, or a fragment relative to the registry URL.
    pub source: String,
}

/// Entries of a single registry fetch, in the order the server returned them.
#[derive(Debug, Clone)]
pub struct Catalog {
    url: Url,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(url: Url, entries: Vec<CatalogEntry>) -> Self {
        Self { url, entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn source_url(&self, entry: &CatalogEntry) -> Result<Url, FetchError> {
        Url::parse(&entry.source)
            .or_else(|_| self.url.join(&entry.source))
            .map_err(|_| FetchError::InvalidSource(entry.source.clone()))
    }
}

/// Turn a configured registry location into a URL. Anything that is not an
/// absolute URL is a filesystem path relative to `root`.
pub fn resolve_registry_url(location: &str, root: &Path) -> Result<Url> {
    let invalid = |reason: &str| Error::InvalidRegistryUrl {
        location: location.to_string(),
        reason: reason.to_string(),
    };
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(invalid("location is empty"));
    }
    match Url::parse(trimmed) {
        // single-letter schemes are Windows drive letters, not URLs
        Ok(url) if url.scheme().len() > 1 => Ok(url),
        _ => {
            let path = Path::new(trimmed);
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::path::absolute(root.join(path)).map_err(|e| invalid(&e.to_string()))?
            };
            Url::from_file_path(&path).map_err(|_| invalid("path cannot be expressed as a file URL"))
        }
    }
}

// Each entry must be a JSON object; serde alone would also read `["name", "source"]` tuples.
fn parse_entries(body: &[u8]) -> Result<Vec<CatalogEntry>, String> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(format!("entry {i} is not an object"));
            }
            serde_json::from_value(item).map_err(|e| format!("entry {i}: {e}"))
        })
        .collect()
}

pub struct RegistryClient<F> {
    fetcher: F,
    url: Url,
}

impl<F: Fetch> RegistryClient<F> {
    pub fn new(fetcher: F, url: Url) -> Self {
        Self { fetcher, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Single attempt; no retries.
    pub fn fetch_catalog(&self) -> Result<Catalog> {
        let body = self
            .fetcher
            .fetch(&self.url)
            .map_err(|cause| Error::RegistryUnreachable {
                url: self.url.to_string(),
                cause,
            })?;
        let entries = parse_entries(&body).map_err(|reason| Error::RegistryMalformed {
            url: self.url.to_string(),
            reason,
        })?;
        tracing::debug!(url = %self.url, entries = entries.len(), "fetched catalog");
        Ok(Catalog::new(self.url.clone(), entries))
    }

    /// Download the raw content of one hook.
    pub fn fetch_source(&self, catalog: &Catalog, entry: &CatalogEntry) -> Result<Vec<u8>, FetchError> {
        let url = catalog.source_url(entry)?;
        tracing::debug!(hook = %entry.name, %url, "fetching hook source");
        self.fetcher.fetch(&url)
    }
}
