// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Bearer Token Authentication
//!
//! A single static token guards every route. The header must read exactly
//! `Bearer <token>`: no case folding, no trimming, no alternative schemes.
//!
//! An empty configured token disables authentication entirely. This is an
//! opt-in insecure mode for operators who isolate the endpoint by other
//! means (loopback bind, firewall); the server announces it at startup.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Decide whether a request's credential is acceptable

use subtle::ConstantTimeEq;

const SCHEME_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct BearerAuth {
    /// Full expected header value, `None` when authentication is disabled.
    expected_header: Option<String>,
}

impl BearerAuth {
    pub fn new(token: &str) -> Self {
        let expected_header = if token.is_empty() {
            None
        } else {
            Some(format!("{}{}", SCHEME_PREFIX, token))
        };
        Self { expected_header }
    }

    pub fn is_disabled(&self) -> bool {
        self.expected_header.is_none()
    }

    /// Check the raw `Authorization` header value, if any.
    pub fn authenticate(&self, authorization: Option<&[u8]>) -> bool {
        let Some(expected) = &self.expected_header else {
            return true;
        };

        match authorization {
            Some(presented) => bool::from(presented.ct_eq(expected.as_bytes())),
            None => false,
        }
    }
}

// Never print the token.
impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("disabled", &self.is_disabled())
            .finish()
    }
}
