// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! systemd / journald adapter
//!
//! Drives the managed unit through `systemctl` and reads its log through
//! `journalctl`. Arguments are passed as a fixed vector, never through a
//! shell. stdout and stderr share one pipe so the captured text keeps the
//! order the child wrote it in.
//!
//! No timeout is applied: a hung `systemctl` holds the calling request
//! until it exits.
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure Layer
//! - **Purpose:** `UnitSupervisor` backed by host process execution

use async_trait::async_trait;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::domain::config::UpdaterConfig;
use crate::domain::process::{ProcessResult, EXIT_CODE_UNAVAILABLE};
use crate::domain::unit::{UnitProperty, UnitSupervisor};

#[derive(Debug, Clone)]
pub struct SystemdSupervisor {
    unit: String,
    systemctl: PathBuf,
    journalctl: PathBuf,
}

impl SystemdSupervisor {
    pub fn new(unit: impl Into<String>, systemctl: impl Into<PathBuf>, journalctl: impl Into<PathBuf>) -> Self {
        Self {
            unit: unit.into(),
            systemctl: systemctl.into(),
            journalctl: journalctl.into(),
        }
    }

    pub fn from_config(config: &UpdaterConfig) -> Self {
        Self::new(
            config.unit.clone(),
            config.systemctl.clone(),
            config.journalctl.clone(),
        )
    }

    fn start_args(&self) -> Vec<String> {
        vec!["start".to_string(), self.unit.clone()]
    }

    fn show_args(&self) -> Vec<String> {
        let mut args = vec!["show".to_string(), self.unit.clone()];
        for property in UnitProperty::STATUS_SET {
            args.push("-p".to_string());
            args.push(property.as_str().to_string());
        }
        args
    }

    fn journal_args(&self, lines: u32) -> Vec<String> {
        vec![
            "-u".to_string(),
            self.unit.clone(),
            "-n".to_string(),
            lines.to_string(),
            "--no-pager".to_string(),
        ]
    }
}

#[async_trait]
impl UnitSupervisor for SystemdSupervisor {
    async fn start_unit(&self) -> ProcessResult {
        run_command(&self.systemctl, self.start_args()).await
    }

    async fn query_unit(&self) -> ProcessResult {
        run_command(&self.systemctl, self.show_args()).await
    }

    async fn fetch_log(&self, lines: u32) -> ProcessResult {
        run_command(&self.journalctl, self.journal_args(lines)).await
    }
}

/// Run `program` to completion on the blocking pool.
pub async fn run_command(program: &Path, args: Vec<String>) -> ProcessResult {
    debug!(program = %program.display(), ?args, "Invoking collaborator");

    let owned_program = program.to_path_buf();
    let result = match tokio::task::spawn_blocking(move || run_merged(&owned_program, &args)).await {
        Ok(result) => result,
        Err(e) => ProcessResult::unavailable(format!("Collaborator task failed: {}", e)),
    };

    if !result.success() {
        warn!(
            program = %program.display(),
            exit_code = result.exit_code,
            "Collaborator exited unsuccessfully"
        );
    }

    result
}

fn run_merged(program: &Path, args: &[String]) -> ProcessResult {
    let (mut reader, stdout_writer) = match std::io::pipe() {
        Ok(pipe) => pipe,
        Err(e) => return ProcessResult::unavailable(format!("Failed to create output pipe: {}", e)),
    };
    let stderr_writer = match stdout_writer.try_clone() {
        Ok(writer) => writer,
        Err(e) => return ProcessResult::unavailable(format!("Failed to create output pipe: {}", e)),
    };

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(stdout_writer)
        .stderr(stderr_writer);

    let spawned = command.spawn();
    // The command still holds the write ends; reading would never see EOF.
    drop(command);

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            return ProcessResult::unavailable(format!(
                "Failed to execute {}: {}",
                program.display(),
                e
            ))
        }
    };

    let mut raw = Vec::new();
    let read_error = reader.read_to_end(&mut raw).err();
    let mut output = String::from_utf8_lossy(&raw).into_owned();
    if let Some(e) = read_error {
        output.push_str(&format!("\n[output truncated: {}]", e));
    }

    match child.wait() {
        Ok(status) => ProcessResult::new(status.code().unwrap_or(EXIT_CODE_UNAVAILABLE), output),
        Err(e) => {
            output.push_str(&format!("\n[wait failed: {}]", e));
            ProcessResult::new(EXIT_CODE_UNAVAILABLE, output)
        }
    }
}
