// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the Scorechain client

use thiserror::Error;

/// Errors specific to the Scorechain API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ScorechainError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScorechainError {
    /// HTTP status returned by the API, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ScorechainError::Api { status, .. } => Some(*status),
            ScorechainError::Http(error) => error.status().map(|status| status.as_u16()),
            ScorechainError::Json(_) | ScorechainError::Config(_) => None,
        }
    }
}
