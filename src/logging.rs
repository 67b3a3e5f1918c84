//! Logging System
//!
//! Structured logging using the `tracing` crate. Standard output carries the generated
//! fragments, so log records go to stderr, to a file, or nowhere.

use crate::error::ProcessingError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` turns it off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output includes "file"); resolved at startup when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: true,
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Apply `EGGWARS_LOG_FORMAT` and `EGGWARS_LOG_OUTPUT` when set.
    pub fn apply_env(&mut self) {
        if let Ok(format) = std::env::var("EGGWARS_LOG_FORMAT") {
            self.format = format;
        }
        if let Ok(output) = std::env::var("EGGWARS_LOG_OUTPUT") {
            self.output = output;
        }
    }

    /// Check level, format and output values.
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid log level: {} (must be one of {})",
                self.level,
                LEVELS.join(", ")
            ));
        }
        parse_format(&self.format)?;
        parse_output_destinations(&self.output)?;
        Ok(())
    }
}

/// Default log file under the platform state directory.
pub fn default_log_file_path() -> Result<PathBuf, ProcessingError> {
    let dirs = directories::ProjectDirs::from("", "", "eggwars-spawners").ok_or_else(|| {
        ProcessingError::Config("Could not determine a home directory for the log file".to_string())
    })?;
    let base = dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_local_dir().to_path_buf());
    Ok(base.join("eggwars-spawners.log"))
}

/// Resolve the log file: CLI flag, then config value, then the platform default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ProcessingError> {
    match cli_file.or(config_file) {
        Some(path) => Ok(path),
        None => default_log_file_path(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<LogFormat, String> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        )),
    }
}

/// Output destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputDestinations {
    stderr: bool,
    file: bool,
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, String> {
    match output {
        "stderr" => Ok(OutputDestinations {
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputDestinations {
            stderr: false,
            file: true,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stderr: true,
            file: true,
        }),
        "off" => Ok(OutputDestinations {
            stderr: false,
            file: false,
        }),
        _ => Err(format!(
            "Invalid log output: {} (must be 'stderr', 'file', 'file+stderr', or 'off')",
            output
        )),
    }
}

/// Initialize the logging system
///
/// `EGGWARS_LOG` holds a full filter directive and wins over the configured level.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ProcessingError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    if !config.enabled {
        return Ok(());
    }

    let format = parse_format(&config.format).map_err(ProcessingError::Config)?;
    let output = parse_output_destinations(&config.output).map_err(ProcessingError::Config)?;
    if !output.stderr && !output.file {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if output.stderr {
        let layer = match format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr)
                .boxed(),
            LogFormat::Text => fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(config.color)
                .with_writer(std::io::stderr)
                .boxed(),
        };
        layers.push(layer);
    }

    if output.file {
        let writer = Arc::new(open_log_file(config)?);
        let layer = match format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(writer)
                .boxed(),
            LogFormat::Text => fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        };
        layers.push(layer);
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| ProcessingError::Config(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ProcessingError> {
    let log_file = match &config.file {
        Some(path) => path.clone(),
        None => default_log_file_path()?,
    };

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ProcessingError::Config(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ProcessingError::Config(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ProcessingError> {
    if let Ok(filter) = EnvFilter::try_from_env("EGGWARS_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(directive.parse().map_err(|e| {
            ProcessingError::Config(format!("Invalid log directive: {}", e))
        })?);
    }

    if let Ok(modules_str) = std::env::var("EGGWARS_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ProcessingError::Config(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}
