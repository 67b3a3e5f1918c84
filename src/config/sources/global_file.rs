//! Global config file source: $XDG_CONFIG_HOME/eggwars-spawners/config.toml or
//! ~/.config/eggwars-spawners/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(std::env::var("HOME").ok()?).join(".config"),
    };
    Some(base.join("eggwars-spawners").join("config.toml"))
}

/// The global config file, when one exists.
pub fn existing_config_path() -> Option<PathBuf> {
    let path = global_config_path()?;
    if path.exists() {
        Some(path)
    } else {
        debug!(config_path = %path.display(), "No global configuration file");
        None
    }
}

/// Add the global config file source to the builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    debug!(config_path = %path.display(), "Loading global configuration");
    builder.add_source(File::from(path).required(false))
}
