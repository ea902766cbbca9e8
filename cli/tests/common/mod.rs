// Shared helpers for the integration tests: an in-memory transport for the
// library tests and a throwaway project directory for the binary tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use use_cli::fetch::{Fetch, FetchError};
use use_cli::registry::RegistryClient;
use reqwest::Url;

pub const REGISTRY: &str = "https://registry.test/registry.json";

/// Serves canned responses keyed by URL and records every request.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Result<Vec<u8>, FetchError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn with_catalog(json: &str) -> Self {
        let mut t = Self::default();
        t.responses
            .insert(REGISTRY.to_string(), Ok(json.as_bytes().to_vec()));
        t
    }

    pub fn serve(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Ok(body.as_bytes().to_vec()));
        self
    }

    pub fn fail(mut self, url: &str, err: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn item_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.as_str() != REGISTRY).count()
    }
}

impl Fetch for FakeTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        self.responses
            .get(url.as_str())
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

pub fn registry(transport: &FakeTransport) -> RegistryClient<&FakeTransport> {
    RegistryClient::new(transport, Url::parse(REGISTRY).unwrap())
}

pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut out: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    out.sort();
    out
}

// ---- binary helpers ----

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_use-cli"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A temp working directory with a local registry under `registry/`.
pub struct Project {
    pub dir: tempfile::TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp project");
        std::fs::create_dir_all(dir.path().join("registry/hooks")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_json(&self, json: &str) -> &Self {
        std::fs::write(self.root().join("registry/registry.json"), json).unwrap();
        self
    }

    pub fn registry_hook(&self, file: &str, content: &str) -> &Self {
        std::fs::write(self.root().join("registry/hooks").join(file), content).unwrap();
        self
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root().join(rel)).unwrap()
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Runs the binary from the project root against the local registry.
    /// Returns (stdout, stderr, exit_code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(binary_path())
            .current_dir(self.root())
            .args(["--registry", "registry/registry.json"])
            .args(args)
            .env_remove("USE_CLI_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .expect("failed to execute binary");
        let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
        let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
        (stdout, stderr, output.status.code().unwrap_or(-1))
    }
}
