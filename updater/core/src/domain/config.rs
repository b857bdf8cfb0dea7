// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Updater Configuration
//!
//! Resolved once at startup (CLI flags over environment over defaults) and
//! shared read-only with every request handler.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Immutable process-wide settings for the control endpoint

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::auth::BearerAuth;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9123;
pub const DEFAULT_UNIT: &str = "printer-ui-update.service";
pub const DEFAULT_SYSTEMCTL: &str = "/bin/systemctl";
pub const DEFAULT_JOURNALCTL: &str = "/bin/journalctl";
pub const DEFAULT_LOG_LINES: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Bind host must not be empty")]
    EmptyHost,
    #[error("Unit name must not be empty")]
    EmptyUnit,
    #[error("Log line count must be at least 1")]
    InvalidLogLines,
}

#[derive(Clone, Serialize)]
pub struct UpdaterConfig {
    pub host: String,
    pub port: u16,
    /// Expected bearer token. Empty disables authentication.
    #[serde(skip)]
    pub token: String,
    /// Name of the single managed unit.
    pub unit: String,
    pub systemctl: PathBuf,
    pub journalctl: PathBuf,
    /// Number of log lines returned by a status query.
    pub log_lines: u32,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            token: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            systemctl: PathBuf::from(DEFAULT_SYSTEMCTL),
            journalctl: PathBuf::from(DEFAULT_JOURNALCTL),
            log_lines: DEFAULT_LOG_LINES,
        }
    }
}

impl UpdaterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.unit.is_empty() {
            return Err(ConfigError::EmptyUnit);
        }
        if self.log_lines == 0 {
            return Err(ConfigError::InvalidLogLines);
        }
        Ok(())
    }

    /// `host:port` as handed to the listener. Hostnames are resolved at bind time.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn auth(&self) -> BearerAuth {
        BearerAuth::new(&self.token)
    }

    /// Human-readable token state for diagnostics.
    pub fn token_summary(&self) -> String {
        if self.token.is_empty() {
            "(disabled)".to_string()
        } else {
            format!("(set, {} chars)", self.token.chars().count())
        }
    }
}

impl std::fmt::Debug for UpdaterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdaterConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token", &self.token_summary())
            .field("unit", &self.unit)
            .field("systemctl", &self.systemctl)
            .field("journalctl", &self.journalctl)
            .field("log_lines", &self.log_lines)
            .finish()
    }
}
