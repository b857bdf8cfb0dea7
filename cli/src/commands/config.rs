// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use updaterd_core::domain::config::UpdaterConfig;

use super::EndpointArgs;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (token redacted)
    Show {
        #[command(flatten)]
        endpoint: EndpointArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_command(command: ConfigCommand, token: String) -> Result<()> {
    match command {
        ConfigCommand::Show { endpoint, json } => show(endpoint.into_config(token), json),
    }
}

fn show(config: UpdaterConfig, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", "Current configuration:".bold());
    println!();
    println!("  Listen:     http://{}", config.bind_address());
    println!("  Token:      {}", config.token_summary());
    println!("  Unit:       {}", config.unit);
    println!("  systemctl:  {}", config.systemctl.display());
    println!("  journalctl: {}", config.journalctl.display());
    println!("  Log lines:  {}", config.log_lines);

    if config.auth().is_disabled() {
        println!();
        println!(
            "{}",
            "WARNING: no UPDATER_TOKEN set, any caller can start the update.".yellow().bold()
        );
    }

    if let Err(e) = config.validate() {
        println!();
        println!("{}", format!("✗ {}", e).red());
    }

    Ok(())
}
