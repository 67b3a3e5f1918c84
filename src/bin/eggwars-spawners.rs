//! EggWars spawner generator CLI binary.

use clap::Parser;
use eggwars_spawners::cli::{map_error, Cli, RunContext};
use eggwars_spawners::config::ConfigLoader;
use eggwars_spawners::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref());

    // Logging comes up even when the configuration failed to load, so the failure is logged.
    let logging_config = build_logging_config(&cli, loaded.as_ref().ok().map(|c| &c.logging));
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("eggwars-spawners starting");

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let context = RunContext::from_config(config);
    let command = cli.command.clone().unwrap_or_default();

    match context.execute(&command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output.trim_end());
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_logging_config(cli: &Cli, file_config: Option<&LoggingConfig>) -> LoggingConfig {
    let mut config = file_config.cloned().unwrap_or_default();
    config.apply_env();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    let output_uses_file = config.output == "file" || config.output == "file+stderr";
    if config.enabled && output_uses_file {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), config.file.clone()) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
