// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Application services

pub mod update_control;

pub use update_control::UpdateControlService;
