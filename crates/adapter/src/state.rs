// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the bridge server:
//! configuration, the adapter and the cancellation token used for
//! coordinated shutdown.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    adapter::Adapter,
    config::{Environment, ServerConfig},
};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Adapter shared by all request handlers
    adapter: Arc<Adapter>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `adapter` - Adapter used by the job handler
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        adapter: Arc<Adapter>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            adapter,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Adapter used to execute job requests
    pub fn adapter(&self) -> &Arc<Adapter> {
        &self.adapter
    }

    /// Report the health of the bridge itself
    ///
    /// The Scorechain API is not contacted; every adapter call performs
    /// exactly one upstream request and a health probe would break that.
    pub fn health_check(&self) -> HealthCheck {
        let status = if self.cancellation_token.is_cancelled() {
            HealthStatus::Down {
                reason: Box::from("server is shutting down"),
            }
        } else {
            HealthStatus::Up
        };

        HealthCheck {
            status,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health status of the service
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },
}

/// Health check status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
}
