//! CLI route: single route table and run context. Dispatches to the synthesizer and
//! presentation.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_generate_output, format_materials_output, format_regions_output,
};
use crate::config::{ConfigLoader, SpawnerConfig};
use crate::error::ProcessingError;
use crate::synthesizer::GeneratorConfigSynthesizer;
use std::io::{BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

const MAP_PROMPT: &str = "Where is the map file? (relative to this folder or absolute)";

/// Runtime context for CLI execution: loaded configuration and the synthesizer built
/// from it.
pub struct RunContext {
    config: SpawnerConfig,
    synthesizer: GeneratorConfigSynthesizer,
}

impl RunContext {
    /// Load configuration (user file plus optional explicit file) and build the context.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ProcessingError> {
        Ok(Self::from_config(ConfigLoader::load(config_path)?))
    }

    pub fn from_config(config: SpawnerConfig) -> Self {
        let synthesizer = GeneratorConfigSynthesizer::new(config.generators.clone());
        Self {
            config,
            synthesizer,
        }
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ProcessingError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, "Executing command");

        let result = match command {
            Commands::Generate { map, format } => {
                let path = self.resolve_map_path(map.as_deref())?;
                let synthesis = self.synthesizer.synthesize_file(&path)?;
                if synthesis.is_empty() {
                    info!(path = %path.display(), "No generator regions found");
                }
                format_generate_output(&synthesis, *format)
            }
            Commands::Regions { map, format } => {
                let path = self.resolve_map_path(map.as_deref())?;
                let regions = self.synthesizer.regions_from_file(&path)?;
                format_regions_output(&regions, self.synthesizer.table(), *format)
            }
            Commands::Materials { format } => {
                format_materials_output(self.synthesizer.table(), *format)
            }
        };

        info!(
            command = name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    /// Use the given path, or ask for one.
    fn resolve_map_path(&self, map: Option<&Path>) -> Result<PathBuf, ProcessingError> {
        match map {
            Some(path) => Ok(path.to_path_buf()),
            None => prompt_map_path(),
        }
    }
}

/// Ask for the map path: an interactive prompt on a terminal, one line of stdin otherwise.
fn prompt_map_path() -> Result<PathBuf, ProcessingError> {
    let answer = if std::io::stdin().is_terminal() {
        use dialoguer::Input;

        Input::<String>::new()
            .with_prompt(MAP_PROMPT)
            .interact_text()?
    } else {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ProcessingError::Prompt(e.to_string()))?;
        line
    };

    let path = clean_prompted_path(&answer);
    if path.as_os_str().is_empty() {
        return Err(ProcessingError::Prompt("no map path given".to_string()));
    }
    Ok(path)
}

/// Trim whitespace and one pair of surrounding quotes (as left by drag-and-drop).
pub fn clean_prompted_path(answer: &str) -> PathBuf {
    let trimmed = answer.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}
