// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # updaterd
//!
//! Remote trigger/status endpoint for the host's update job.
//!
//! ## Commands
//!
//! - `updaterd serve` - Run the HTTP control endpoint (POST /run, GET /status)
//! - `updaterd run` - Ask a running endpoint to start the update
//! - `updaterd status` - Print unit state and recent log from a running endpoint
//! - `updaterd config show` - Print the effective configuration
//!
//! Settings come from flags, then `UPDATER_*` environment variables (a
//! `.env` file in the working directory is loaded first), then defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use updaterd::commands::{self, ConfigCommand, EndpointArgs, RemoteArgs};

/// updaterd - Start and observe the host update job over HTTP
#[derive(Parser)]
#[command(name = "updaterd")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Bearer token; empty disables authentication on the endpoint
    #[arg(
        long,
        global = true,
        env = "UPDATER_TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    token: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "UPDATER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the control endpoint in the foreground
    #[command(name = "serve")]
    Serve {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },

    /// Start the update job through a running endpoint
    #[command(name = "run")]
    Run {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Show update unit state and log through a running endpoint
    #[command(name = "status")]
    Status {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Serve { endpoint }) => commands::serve::execute(endpoint, cli.token).await,
        Some(Commands::Run { remote }) => commands::remote::run(remote, &cli.token).await,
        Some(Commands::Status { remote }) => commands::remote::status(remote, &cli.token).await,
        Some(Commands::Config { command }) => {
            commands::config::handle_command(command, cli.token).await
        }
        None => {
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    Ok(())
}
