// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the updaterd CLI

use clap::Args;
use std::path::PathBuf;

use updaterd_core::domain::config::{
    UpdaterConfig, DEFAULT_HOST, DEFAULT_JOURNALCTL, DEFAULT_LOG_LINES, DEFAULT_PORT,
    DEFAULT_SYSTEMCTL, DEFAULT_UNIT,
};

pub mod config;
pub mod remote;
pub mod serve;

pub use self::config::ConfigCommand;
pub use self::remote::RemoteArgs;

/// Settings of the control endpoint itself
#[derive(Args, Debug, Clone)]
pub struct EndpointArgs {
    /// Address to bind the HTTP endpoint to
    #[arg(long, env = "UPDATER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP endpoint to
    #[arg(long, env = "UPDATER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// systemd unit that runs the update job
    #[arg(long, env = "UPDATER_UNIT", default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Path to systemctl
    #[arg(long, env = "UPDATER_SYSTEMCTL", default_value = DEFAULT_SYSTEMCTL, value_name = "PATH")]
    pub systemctl: PathBuf,

    /// Path to journalctl
    #[arg(long, env = "UPDATER_JOURNALCTL", default_value = DEFAULT_JOURNALCTL, value_name = "PATH")]
    pub journalctl: PathBuf,

    /// Log lines returned by GET /status
    #[arg(long, env = "UPDATER_LOG_LINES", default_value_t = DEFAULT_LOG_LINES)]
    pub log_lines: u32,
}

impl EndpointArgs {
    pub fn into_config(self, token: String) -> UpdaterConfig {
        UpdaterConfig {
            host: self.host,
            port: self.port,
            token,
            unit: self.unit,
            systemctl: self.systemctl,
            journalctl: self.journalctl,
            log_lines: self.log_lines,
        }
    }
}
