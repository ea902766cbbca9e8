use crate::error::{Error, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "hooks.json";
pub const DEFAULT_DESTINATION: &str = "src/hook/";

/// Contents of `hooks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HooksConfig {
    /// Directory hooks are written into. Relative paths are taken from the
    /// directory holding the config file.
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
            registry_url: None,
        }
    }
}

impl HooksConfig {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            registry_url: None,
        }
    }

    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = Some(url.into());
        self
    }

    pub fn destination_dir(&self, root: &Path) -> PathBuf {
        let dest = Path::new(self.destination.trim());
        if dest.is_absolute() {
            dest.to_path_buf()
        } else {
            root.join(dest)
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".into());
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Only a JSON object is a config; serde alone would also accept an array
    /// of field values.
    fn from_json(data: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(data).map_err(|e| e.to_string())?;
        if !value.is_object() {
            return Err("expected a JSON object".into());
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Reads and writes the config file at one fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `hooks.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative destinations and registry paths are resolved against.
    pub fn root_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Returns the stored config. A missing file is not an error: the default
    /// config is written to disk and returned.
    pub fn load(&self) -> Result<HooksConfig> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let cfg = HooksConfig::default();
                tracing::info!(path = %self.path.display(), "no config found, writing defaults");
                self.write(&cfg)?;
                return Ok(cfg);
            }
            Err(source) => {
                return Err(Error::ConfigIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let cfg = HooksConfig::from_json(&data).map_err(|reason| Error::ConfigCorrupt {
            path: self.path.clone(),
            reason,
        })?;
        cfg.validate().map_err(|reason| Error::ConfigCorrupt {
            path: self.path.clone(),
            reason,
        })?;
        Ok(cfg)
    }

    /// Writes `cfg` only when no config file exists yet.
    pub fn initialize(&self, cfg: &HooksConfig) -> Result<InitOutcome> {
        if self.exists() {
            tracing::debug!(path = %self.path.display(), "config already present, leaving it untouched");
            return Ok(InitOutcome::AlreadyExists);
        }
        cfg.validate().map_err(Error::InvalidConfig)?;
        self.write(cfg)?;
        Ok(InitOutcome::Created)
    }

    fn write(&self, cfg: &HooksConfig) -> Result<()> {
        let io_err = |source: std::io::Error| Error::ConfigIo {
            path: self.path.clone(),
            source,
        };
        let json = cfg.to_json().map_err(|e| io_err(e.into()))?;
        fs::create_dir_all(self.root_dir()).map_err(io_err)?;
        fs::write(&self.path, json).map_err(io_err)
    }
}
