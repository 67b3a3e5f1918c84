//! CLI help and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string recorded in log records (e.g. "generate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Regions { .. } => "regions",
        Commands::Materials { .. } => "materials",
    }
}
