use std::io;

use portico::ConfigError;
use portico::preferences::PreferenceError;
use thiserror::Error;

use crate::script::ScriptError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Preferences(#[from] PreferenceError),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
