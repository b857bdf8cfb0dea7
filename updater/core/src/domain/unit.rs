// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Managed Unit Collaborator
//!
//! The supervisor that owns the update unit is never modelled here, only
//! reached through [`UnitSupervisor`]. Every call reports its outcome as a
//! [`ProcessResult`]; a collaborator that cannot run is a result, not an error.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Port for starting, inspecting and reading the log of the managed unit

use async_trait::async_trait;
use std::fmt;

use crate::domain::process::ProcessResult;

/// Supervisor-reported properties included in a status query, in query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitProperty {
    ActiveState,
    SubState,
    Result,
    ExecMainStatus,
    ExecMainStartTimestamp,
    ExecMainExitTimestamp,
}

impl UnitProperty {
    pub const STATUS_SET: [UnitProperty; 6] = [
        UnitProperty::ActiveState,
        UnitProperty::SubState,
        UnitProperty::Result,
        UnitProperty::ExecMainStatus,
        UnitProperty::ExecMainStartTimestamp,
        UnitProperty::ExecMainExitTimestamp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitProperty::ActiveState => "ActiveState",
            UnitProperty::SubState => "SubState",
            UnitProperty::Result => "Result",
            UnitProperty::ExecMainStatus => "ExecMainStatus",
            UnitProperty::ExecMainStartTimestamp => "ExecMainStartTimestamp",
            UnitProperty::ExecMainExitTimestamp => "ExecMainExitTimestamp",
        }
    }
}

impl fmt::Display for UnitProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait UnitSupervisor: Send + Sync {
    /// Ask the supervisor to start the unit. Returns once the start request
    /// has been accepted or refused, not when the job finishes.
    async fn start_unit(&self) -> ProcessResult;

    /// Read [`UnitProperty::STATUS_SET`] for the unit.
    async fn query_unit(&self) -> ProcessResult;

    /// Most recent `lines` log lines of the unit, oldest first.
    async fn fetch_log(&self, lines: u32) -> ProcessResult;
}
