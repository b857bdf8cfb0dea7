// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Remote commands: `updaterd run` and `updaterd status`
//!
//! Talk to an already running endpoint, the same way the kiosk UI does.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::client::{RemoteReply, UpdaterClient};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9123";

#[derive(Args, Debug, Clone)]
pub struct RemoteArgs {
    /// Base URL of the running update controller
    #[arg(long, env = "UPDATER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Ask the endpoint to start the update unit.
pub async fn run(args: RemoteArgs, token: &str) -> Result<()> {
    let client = UpdaterClient::new(&args.base_url, token)?;
    let reply = client.trigger().await?;
    ensure_ok(&reply, "Update start")?;

    println!("{}", "✓ Update started".green());
    if let Some(output) = reply.envelope.output.as_deref().filter(|o| !o.is_empty()) {
        print!("{}", output);
    }
    Ok(())
}

/// Print unit state and recent log.
pub async fn status(args: RemoteArgs, token: &str) -> Result<()> {
    let client = UpdaterClient::new(&args.base_url, token)?;
    let reply = client.status().await?;

    // A partial failure still carries both texts, show them before failing.
    if let Some(state) = &reply.envelope.state {
        println!("{}", "Unit state:".bold());
        print!("{}", state);
        println!();
    }
    if let Some(log) = &reply.envelope.log {
        println!("{}", "Recent log:".bold());
        print!("{}", log);
    }

    ensure_ok(&reply, "Status query")
}

fn ensure_ok(reply: &RemoteReply, operation: &str) -> Result<()> {
    if reply.envelope.ok {
        return Ok(());
    }
    anyhow::bail!(
        "{} failed (HTTP {}): {}",
        operation,
        reply.status,
        reply.envelope.failure_text().trim_end()
    )
}
