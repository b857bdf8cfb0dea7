// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Presentation layer: HTTP API and server lifecycle

pub mod api;
pub mod server;

pub use api::{app, AppState, Route};
pub use server::{ControlServer, ServerError};
