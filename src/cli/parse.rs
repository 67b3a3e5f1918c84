//! CLI parse: clap types. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Generate upgradable generator filters and spawners for EggWars PGM maps
#[derive(Parser, Debug)]
#[command(name = "eggwars-spawners")]
#[command(about = "Generate upgradable generator filters and spawners for EggWars PGM maps")]
pub struct Cli {
    /// Defaults to `generate`, prompting for the map path
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (layered over the user configuration)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr, off)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print level variables and spawners for every generator region in a map
    Generate {
        /// Path to map.xml (prompted when omitted)
        map: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = GenerateFormat::Text)]
        format: GenerateFormat,
    },
    /// List the generator regions detected in a map
    Regions {
        /// Path to map.xml (prompted when omitted)
        map: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = GenerateFormat::Text)]
        format: GenerateFormat,
    },
    /// Show the effective generator level table
    Materials {
        /// Output format
        #[arg(long, value_enum, default_value_t = MaterialsFormat::Text)]
        format: MaterialsFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate {
            map: None,
            format: GenerateFormat::Text,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialsFormat {
    Text,
    Json,
    Toml,
}
