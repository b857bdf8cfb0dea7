// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! `updaterd serve`: run the control endpoint in the foreground
//!
//! Meant to be started by systemd itself (as root or with polkit rights
//! over the managed unit). Only a bind failure stops it before serving.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use updaterd_core::infrastructure::SystemdSupervisor;
use updaterd_core::presentation::ControlServer;

use super::EndpointArgs;

pub async fn execute(endpoint: EndpointArgs, token: String) -> Result<()> {
    let config = endpoint.into_config(token);

    info!(
        unit = %config.unit,
        systemctl = %config.systemctl.display(),
        journalctl = %config.journalctl.display(),
        "Starting update controller"
    );

    let supervisor = Arc::new(SystemdSupervisor::from_config(&config));
    let server = ControlServer::bind(&config, supervisor)
        .await
        .context("Failed to start update controller")?;

    server
        .run()
        .await
        .context("Update controller stopped with an error")?;

    Ok(())
}
