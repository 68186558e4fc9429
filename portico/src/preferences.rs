//! Persistent user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key the preferred language is stored under.
pub const LANGUAGE_KEY: &str = "preferredLanguage";

/// Preference error type.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt preferences file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Storage backend for string preferences.
pub trait PreferenceBackend {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Remove `key`.
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

/// Backend that keeps preferences in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Backend persisting preferences as a flat JSON object.
///
/// The whole file is rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileBackend {
    /// Open the file at `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PreferenceError::Io { path, source }),
        };
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        let io_err = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl PreferenceBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Typed preferences over a backend.
#[derive(Debug, Clone)]
pub struct Preferences<B> {
    backend: B,
}

impl<B: PreferenceBackend> Preferences<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The stored language, or `default` when none was chosen.
    pub fn language_or(&self, default: &str) -> Result<String, PreferenceError> {
        Ok(self
            .backend
            .get(LANGUAGE_KEY)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Remember the chosen language.
    pub fn set_language(&mut self, language: &str) -> Result<(), PreferenceError> {
        log::debug!("Preferred language set to '{}'", language);
        self.backend.set(LANGUAGE_KEY, language)
    }

    /// Access the backend directly.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
