// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Control endpoint server lifecycle
//!
//! Binding is the only fatal step: if the configured address cannot be
//! acquired the caller gets [`ServerError::Bind`] and nothing is served.

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::application::update_control::UpdateControlService;
use crate::domain::config::{ConfigError, UpdaterConfig};
use crate::domain::unit::UnitSupervisor;
use crate::presentation::api::{app, AppState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}

pub struct ControlServer {
    listener: TcpListener,
    router: Router,
}

impl ControlServer {
    /// Validate the configuration and acquire the listening socket.
    pub async fn bind(
        config: &UpdaterConfig,
        supervisor: Arc<dyn UnitSupervisor>,
    ) -> Result<Self, ServerError> {
        config.validate()?;

        let auth = config.auth();
        if auth.is_disabled() {
            warn!("No bearer token configured: authentication is DISABLED and every caller may start the update");
        }

        let address = config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;

        let service = UpdateControlService::new(supervisor, config.log_lines);
        let router = app(Arc::new(AppState::new(service, auth)));

        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::Serve)
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }

    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            info!("Update controller listening on http://{}", addr);
        }

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        info!("Update controller shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
