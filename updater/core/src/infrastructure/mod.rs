// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Infrastructure adapters

pub mod systemd;

pub use systemd::SystemdSupervisor;
