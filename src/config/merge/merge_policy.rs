//! Merge rules: defaults, override order, conflict handling.
//!
//! Logging settings merge key by key through the `config` builder. Generator tables
//! do not: each file is read on its own and its `[generators.<material>]` entries
//! replace the whole entry for that material, in file precedence order, on top of the
//! built-in table. Material keys keep their case.

use crate::error::ProcessingError;
use crate::levels::{GeneratorLevels, GeneratorTable};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The `[generators]` section of one configuration file.
#[derive(Debug, Default, Deserialize)]
struct GeneratorLayer {
    #[serde(default)]
    generators: BTreeMap<String, GeneratorLevels>,
}

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}

/// Read the generator entries of a single configuration file.
pub fn generator_layer(path: &Path) -> Result<BTreeMap<String, GeneratorLevels>, ProcessingError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ProcessingError::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    let layer: GeneratorLayer = toml::from_str(&contents)?;
    Ok(layer.generators)
}

/// Lay each file's materials over the built-in table, lowest precedence first.
pub fn overlay_generators<I>(layers: I) -> GeneratorTable
where
    I: IntoIterator<Item = BTreeMap<String, GeneratorLevels>>,
{
    let mut table = GeneratorTable::builtin();
    for layer in layers {
        for (material, levels) in layer {
            table.insert(material, levels);
        }
    }
    table
}
