//! Byte transport shared by the catalog fetch and per-hook downloads.

use fs_err as fs;
use reqwest::blocking::Client;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("transfer failed: {0}")]
    Transport(String),
    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),
    #[error("source '{0}' cannot be turned into a URL")]
    InvalidSource(String),
}

/// Anything that can turn an absolute URL into bytes.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: Fetch + ?Sized> Fetch for Box<T> {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// Network transport for `http`/`https`, plus direct reads for `file` URLs.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("use-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    fn get(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| self.classify(e))?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        let bytes = resp.bytes().map_err(|e| self.classify(e))?;
        Ok(bytes.to_vec())
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_connect() {
            FetchError::Connect(root_cause(&err))
        } else {
            FetchError::Transport(root_cause(&err))
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        match url.scheme() {
            "http" | "https" => self.get(url),
            "file" => read_file_url(url),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}

fn read_file_url(url: &Url) -> Result<Vec<u8>, FetchError> {
    let path = url
        .to_file_path()
        .map_err(|_| FetchError::InvalidSource(url.to_string()))?;
    tracing::debug!(path = %path.display(), "reading local file");
    fs::read(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FetchError::NotFound(path),
        _ => FetchError::Transport(e.to_string()),
    })
}

// reqwest wraps hyper/io errors several layers deep; the innermost message is the readable one.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}
