// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! HTTP client for a running update controller

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

/// Envelope as seen by a caller. Fields depend on the endpoint, so all but
/// `ok` are optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RemoteEnvelope {
    /// The most useful text to show when `ok` is false.
    pub fn failure_text(&self) -> &str {
        self.error
            .as_deref()
            .or(self.output.as_deref())
            .or(self.state.as_deref())
            .unwrap_or("(no details)")
    }
}

#[derive(Debug, Clone)]
pub struct RemoteReply {
    pub status: u16,
    pub envelope: RemoteEnvelope,
}

#[derive(Debug, Clone)]
pub struct UpdaterClient {
    client: Client,
    base_url: String,
    token: String,
}

impl UpdaterClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        // No timeout: /run and /status last as long as systemctl does
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /run`
    pub async fn trigger(&self) -> Result<RemoteReply> {
        let request = self.client.post(format!("{}/run", self.base_url));
        self.send(request).await
    }

    /// `GET /status`
    pub async fn status(&self) -> Result<RemoteReply> {
        let request = self.client.get(format!("{}/status", self.base_url));
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<RemoteReply> {
        let request = if self.token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.token)
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("Could not reach updater service at {}", self.base_url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read updater response")?;

        let envelope: RemoteEnvelope = serde_json::from_str(&body).with_context(|| {
            format!("Updater returned HTTP {} with a non-JSON body: {}", status, body)
        })?;

        Ok(RemoteReply { status, envelope })
    }
}
