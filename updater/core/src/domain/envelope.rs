// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

use crate::domain::process::ProcessResult;

pub const ERROR_UNAUTHORIZED: &str = "unauthorized";
pub const ERROR_NOT_FOUND: &str = "not found";

/// JSON body of every response. Each shape carries `ok`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Trigger { ok: bool, output: String },
    Status { ok: bool, state: String, log: String },
    Error { ok: bool, error: String },
}

impl Envelope {
    pub fn trigger(result: ProcessResult) -> Self {
        Envelope::Trigger {
            ok: result.success(),
            output: result.output,
        }
    }

    /// `ok` only when both the state query and the log fetch succeeded.
    /// Both texts are kept either way.
    pub fn status(state: ProcessResult, log: ProcessResult) -> Self {
        Envelope::Status {
            ok: state.success() && log.success(),
            state: state.output,
            log: log.output,
        }
    }

    pub fn unauthorized() -> Self {
        Self::error(ERROR_UNAUTHORIZED)
    }

    pub fn not_found() -> Self {
        Self::error(ERROR_NOT_FOUND)
    }

    fn error(message: &str) -> Self {
        Envelope::Error {
            ok: false,
            error: message.to_string(),
        }
    }

    pub fn ok(&self) -> bool {
        match self {
            Envelope::Trigger { ok, .. }
            | Envelope::Status { ok, .. }
            | Envelope::Error { ok, .. } => *ok,
        }
    }
}
