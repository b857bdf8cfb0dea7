// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! updaterd core
//!
//! Remote control endpoint for a single supervised update unit.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Domain model, systemd adapter, trigger/status service and the HTTP surface

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
