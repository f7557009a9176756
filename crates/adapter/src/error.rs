// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! This module provides the adapter error returned by a single job execution
//! and the server error type, including its HTTP response mapping.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scorechain_client::ScorechainError;
use thiserror::Error;

/// Errors returned by [`Adapter::execute`](crate::Adapter::execute)
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A required request parameter is missing or blank
    #[error("{message}")]
    MissingParameter {
        /// Endpoint the parameters are required by
        endpoint: &'static str,
        /// Message naming the required parameters
        message: &'static str,
    },

    /// The `endpoint` parameter is missing or names no known operation
    #[error("unrecognized or unsupported Scorechain Ethereum API endpoint")]
    UnsupportedEndpoint {
        /// Endpoint value received, if any
        endpoint: Option<String>,
    },

    /// The Scorechain API call failed at transport, status or decode level
    #[error(transparent)]
    Upstream(#[from] ScorechainError),
}

impl AdapterError {
    /// Whether the error was raised before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::UnsupportedEndpoint { .. }
        )
    }

    /// HTTP status reported to the bridge caller
    pub fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Comprehensive error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Scorechain client could not be created
    #[error("Scorechain client error: {0}")]
    Client(#[from] ScorechainError),

    /// JSON parsing errors with detailed context
    #[error("Invalid JSON request: {message}")]
    JsonError {
        /// Detailed error message
        message: String,
    },
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. }
            | ServerError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::JsonError { .. } => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));
        (status, body).into_response()
    }
}
