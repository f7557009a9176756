// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides the route table of the bridge server.

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{health_handler, job_handler};

use crate::{metrics::metrics_handler, state::ServerState};

/// Create application routes
///
/// - `POST /` runs a job through the adapter
/// - `GET /health` reports the bridge status
/// - `GET /metrics` exports Prometheus metrics
pub fn create_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(job_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}
