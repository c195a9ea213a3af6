//! Application settings loaded from a TOML file and environment variables.

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_READ_TIMEOUT_SECONDS, DEFAULT_STORAGE, ENV_LISTEN_ADDR,
    ENV_READ_TIMEOUT_SECONDS, ENV_SEED_DEFAULTS, ENV_STORAGE,
};
use crate::errors::{AppError, AppResult};
use crate::infra::StorageKind;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Storage backend name
    #[serde(default = "default_storage")]
    pub storage: String,
    pub listen_addr: String,
    /// Request read timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Create preset cycles and currencies at startup
    #[serde(default)]
    pub seed_defaults: bool,
}

fn default_storage() -> String {
    DEFAULT_STORAGE.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_READ_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            timeout: default_timeout(),
            seed_defaults: false,
        }
    }
}

impl Config {
    /// Load configuration: the TOML file when given, then `.env` and
    /// process environment overrides on top.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.check()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> AppResult<Self> {
        toml::from_str(raw).map_err(|e| AppError::config(e.to_string()))
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(storage) = lookup(ENV_STORAGE) {
            self.storage = storage;
        }
        if let Some(addr) = lookup(ENV_LISTEN_ADDR) {
            self.listen_addr = addr;
        }
        if let Some(raw) = lookup(ENV_READ_TIMEOUT_SECONDS) {
            self.timeout = raw.trim().parse().map_err(|_| {
                AppError::config(format!("{} must be a whole number of seconds", ENV_READ_TIMEOUT_SECONDS))
            })?;
        }
        if let Some(raw) = lookup(ENV_SEED_DEFAULTS) {
            self.seed_defaults = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }

    fn check(&self) -> AppResult<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(AppError::config("listen_addr is required"));
        }
        if self.timeout == 0 {
            return Err(AppError::config("timeout must be greater than 0"));
        }
        Ok(())
    }

    /// Resolve the configured storage backend
    pub fn storage_kind(&self) -> AppResult<StorageKind> {
        self.storage.parse()
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
