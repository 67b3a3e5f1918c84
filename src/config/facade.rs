//! Config loader facade: builds the layered configuration and validates it.

use super::merge::merge_policy::{builder_with_defaults, generator_layer, overlay_generators};
use super::sources::{explicit_file, global_file};
use super::SpawnerConfig;
use crate::error::ProcessingError;
use crate::logging::LoggingConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings merged key by key across files. Generators are layered separately.
#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    logging: LoggingConfig,
}

/// Loads `SpawnerConfig` from defaults and files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in configuration, no files consulted.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> SpawnerConfig {
        SpawnerConfig::default()
    }

    /// Load defaults, the global file (if present), then `explicit` (must exist).
    pub fn load(explicit: Option<&Path>) -> Result<SpawnerConfig, ProcessingError> {
        let mut builder = builder_with_defaults()?;
        let mut files = Vec::new();
        if let Some(path) = global_file::existing_config_path() {
            builder = global_file::add_to_builder(builder, &path);
            files.push(path);
        }
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
            files.push(path.to_path_buf());
        }
        Self::finish(builder, &files)
    }

    /// Load defaults and a single file, skipping the global file.
    pub fn load_from_file(path: &Path) -> Result<SpawnerConfig, ProcessingError> {
        let builder = explicit_file::add_to_builder(builder_with_defaults()?, path)?;
        Self::finish(builder, &[path.to_path_buf()])
    }

    /// Location of the user-level configuration file.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        files: &[PathBuf],
    ) -> Result<SpawnerConfig, ProcessingError> {
        let file_config: FileConfig = builder.build()?.try_deserialize()?;
        let layers = files
            .iter()
            .map(|path| generator_layer(path))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            files = files.len(),
            overrides = layers.iter().map(|l| l.len()).sum::<usize>(),
            "Loaded configuration sources"
        );

        let config = SpawnerConfig {
            generators: overlay_generators(layers),
            logging: file_config.logging,
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ProcessingError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }
}
