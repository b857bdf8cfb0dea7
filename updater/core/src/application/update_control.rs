// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Update Control Service
//!
//! Implements the two operations exposed over HTTP:
//!
//! | Operation | Collaborator calls | `ok` when |
//! |-----------|--------------------|-----------|
//! | trigger   | `start_unit`       | start exits 0 |
//! | status    | `query_unit`, then `fetch_log` | both exit 0 |
//!
//! Collaborator failures never escape as errors; they are folded into the
//! returned [`Envelope`]. Nothing is retried.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Map collaborator results onto response envelopes

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::envelope::Envelope;
use crate::domain::unit::UnitSupervisor;

pub struct UpdateControlService {
    supervisor: Arc<dyn UnitSupervisor>,
    log_lines: u32,
}

impl UpdateControlService {
    pub fn new(supervisor: Arc<dyn UnitSupervisor>, log_lines: u32) -> Self {
        Self {
            supervisor,
            log_lines,
        }
    }

    /// Request a start of the managed unit.
    ///
    /// Whether a second start while the job is running is a no-op is up to
    /// the supervisor; no exclusivity is enforced here.
    pub async fn trigger(&self) -> Envelope {
        info!("Update start requested");
        let result = self.supervisor.start_unit().await;

        if result.success() {
            info!("Update unit start accepted");
        } else {
            warn!(exit_code = result.exit_code, "Update unit start failed");
        }

        Envelope::trigger(result)
    }

    /// Unit state followed by its recent log.
    ///
    /// The log is fetched even when the state query fails so the caller
    /// still sees whatever text each call produced.
    pub async fn status(&self) -> Envelope {
        let state = self.supervisor.query_unit().await;
        if !state.success() {
            warn!(exit_code = state.exit_code, "Unit state query failed");
        }

        let log = self.supervisor.fetch_log(self.log_lines).await;
        if !log.success() {
            warn!(exit_code = log.exit_code, "Unit log fetch failed");
        }

        debug!(
            state_exit = state.exit_code,
            log_exit = log.exit_code,
            "Status collected"
        );

        Envelope::status(state, log)
    }
}
