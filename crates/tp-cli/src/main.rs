//! tp - tenant portal CLI
//!
//! Resolves the tenant for a hostname and talks to that tenant's hosted auth
//! backend.
//!
//! # Examples
//!
//! ```bash
//! # Which tenant serves this hostname?
//! tp --hostname 1.upscalingmedia.live resolve --pretty
//!
//! # Sign in and remember the email
//! TP_PASSWORD=... tp --hostname 2.upscalingmedia.live login --email me@example.com --remember
//! ```

use tp_cli::{Cli, CliError, CliResult, logger};
use tp_config::{Config, ProcessEnv, TenantRegistry};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(cli).await {
        Ok((value, pretty)) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: Cli) -> CliResult<(Value, bool)> {
    // .env is optional; real environment variables win
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir).map_err(|e| CliError::LogDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tp v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }
    config.log_summary();

    // The registry is built and overridden here, then only read
    let mut registry = TenantRegistry::from_config(config.tenants.clone())?;
    let written = registry.bulk_override_from_source(&ProcessEnv);
    debug!("Applied {written} tenant profile override(s) from the environment");

    let value = tp_cli::run(cli.command, &cli.hostname, &config, &registry).await?;
    Ok((value, cli.pretty))
}
