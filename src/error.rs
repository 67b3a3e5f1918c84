//! Error types for the generator spawner synthesizer.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure that aborts a run.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Map file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read map file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed map document at byte {position}: {message}")]
    MalformedDocument { position: u64, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ProcessingError {
    fn from(err: config::ConfigError) -> Self {
        ProcessingError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::Output(err.to_string())
    }
}

impl From<toml::ser::Error> for ProcessingError {
    fn from(err: toml::ser::Error) -> Self {
        ProcessingError::Output(err.to_string())
    }
}

impl From<toml::de::Error> for ProcessingError {
    fn from(err: toml::de::Error) -> Self {
        ProcessingError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for ProcessingError {
    fn from(err: dialoguer::Error) -> Self {
        ProcessingError::Prompt(err.to_string())
    }
}

impl ProcessingError {
    /// Map an I/O failure on the input path to the matching variant.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ProcessingError::InputNotFound(path)
        } else {
            ProcessingError::InputUnreadable { path, source }
        }
    }

    pub(crate) fn malformed(position: u64, message: impl Into<String>) -> Self {
        ProcessingError::MalformedDocument {
            position,
            message: message.into(),
        }
    }
}
