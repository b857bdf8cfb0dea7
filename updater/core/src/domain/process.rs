// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

/// Exit code reported when a collaborator could not be run at all
/// (missing binary, spawn failure) or was terminated by a signal.
pub const EXIT_CODE_UNAVAILABLE: i32 = -1;

/// Outcome of a single collaborator invocation.
///
/// `output` is stdout and stderr merged in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub exit_code: i32,
    pub output: String,
}

impl ProcessResult {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// A collaborator that never produced an exit status.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(EXIT_CODE_UNAVAILABLE, reason)
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
