//! Portal configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::{DEFAULT_MIN_SUGGEST_LEN, DEFAULT_SEARCH_PATH};
use crate::validation::DEFAULT_MIN_PASSWORD_LEN;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables of the portal. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Quiet period before a search suggestion fires, in milliseconds.
    pub debounce_ms: u64,
    /// Shortest query that triggers a suggestion.
    pub min_suggest_len: usize,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_ms: u64,
    /// Path the search form redirects to.
    pub search_path: String,
    /// Minimum password length on registration.
    pub min_password_len: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            min_suggest_len: DEFAULT_MIN_SUGGEST_LEN,
            toast_ms: 4500,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl PortalConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load a JSON config file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// The suggestion quiet period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The toast duration.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Set the suggestion quiet period.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_ms = delay.as_millis() as u64;
        self
    }

    /// Set the minimum password length.
    pub fn with_min_password_len(mut self, len: usize) -> Self {
        self.min_password_len = len;
        self
    }
}
