//! Configuration System
//!
//! Layered configuration: built-in defaults, then the user-level file, then an explicit
//! `--config` file. Generator materials merge by name, so a file only needs the
//! materials it adds or retunes.

use crate::levels::GeneratorTable;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Generator level table, keyed by material
    pub generators: GeneratorTable,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            generators: GeneratorTable::builtin(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Generators(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generators(msg) => write!(f, "Generators: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SpawnerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.generators.is_empty() {
            errors.push(ValidationError::Generators(
                "at least one material must be configured".to_string(),
            ));
        }
        if let Err(messages) = self.generators.validate() {
            errors.extend(messages.into_iter().map(ValidationError::Generators));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
