// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain types for the update controller.
//!
//! Everything here is request-scoped or immutable for the life of the
//! process; nothing in the domain owns mutable state.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod process;
pub mod unit;

pub use auth::BearerAuth;
pub use config::{ConfigError, UpdaterConfig};
pub use envelope::Envelope;
pub use process::ProcessResult;
pub use unit::{UnitProperty, UnitSupervisor};
