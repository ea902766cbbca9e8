use std::path::PathBuf;

use crate::fetch::FetchError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal failures. Each one aborts the running command before any partial
/// effect on the destination directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file {} is corrupt: {reason}", path.display())]
    ConfigCorrupt { path: PathBuf, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot access config file {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("registry location '{location}' is not usable: {reason}")]
    InvalidRegistryUrl { location: String, reason: String },
    #[error("registry {url} is unreachable: {cause}")]
    RegistryUnreachable { url: String, cause: FetchError },
    #[error("registry {url} returned an unexpected catalog: {reason}")]
    RegistryMalformed { url: String, reason: String },
    #[error("no hook names given")]
    EmptyRequest,
    #[error("not found in the registry: {}", names.join(", "))]
    ItemsUnavailable { names: Vec<String> },
    #[error("cannot create destination directory {}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
