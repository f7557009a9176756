// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Scorechain Ethereum API client
//!
//! This module provides [`ScorechainClient`], a thin wrapper around a shared
//! `reqwest` client that builds endpoint URLs from a configured base, forwards
//! the optional API token and decodes the JSON body into typed documents.

use reqwest::{Client, header::ACCEPT};
use scorechain_types::{Scoring, Status, Transaction};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ScorechainError;

/// Public Scorechain Ethereum API host used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://api.ethereum.scorechain.com";

/// Traversal depth used by the scoring endpoint when the caller gives none
pub const DEFAULT_SCORING_DEPTH: u64 = 3;

const USER_AGENT: &str = concat!("scorechain-adapter/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Scorechain API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorechainConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: Url,
    /// API token forwarded as the `token` query parameter
    pub token: Option<String>,
}

impl ScorechainConfig {
    /// Create a configuration from an already parsed base URL
    ///
    /// An empty or whitespace-only token is treated as no token.
    ///
    /// # Errors
    ///
    /// Returns [`ScorechainError::Config`] if the URL cannot carry a path
    /// (for example `mailto:` or `data:` URLs).
    pub fn new(base_url: Url, token: Option<String>) -> Result<Self, ScorechainError> {
        if base_url.cannot_be_a_base() {
            return Err(ScorechainError::Config(format!(
                "base URL cannot carry endpoint paths: {base_url}"
            )));
        }

        let token = token.filter(|token| !token.trim().is_empty());
        Ok(Self { base_url, token })
    }

    /// Parse a base URL string and create a configuration from it
    ///
    /// # Errors
    ///
    /// Returns [`ScorechainError::Config`] if the string is not a valid base URL.
    pub fn parse(base_url: &str, token: Option<String>) -> Result<Self, ScorechainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ScorechainError::Config(format!("invalid base URL '{base_url}': {e}"))
        })?;
        Self::new(base_url, token)
    }
}

/// Scorechain Ethereum API client
#[derive(Debug, Clone)]
pub struct ScorechainClient {
    client: Client,
    config: ScorechainConfig,
}

impl ScorechainClient {
    /// Create a new Scorechain API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL
    /// cannot carry endpoint paths
    pub fn new(config: ScorechainConfig) -> Result<Self, ScorechainError> {
        let config = ScorechainConfig::new(config.base_url, config.token)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScorechainError::Http)?;

        Ok(Self { client, config })
    }

    /// Client configuration
    pub fn config(&self) -> &ScorechainConfig {
        &self.config
    }

    /// Fetch the synchronisation status of the data source
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status or the body cannot be decoded
    pub async fn get_status(&self) -> Result<Status, ScorechainError> {
        let url = self.status_url()?;
        self.fetch("status", url).await
    }

    /// Fetch a transaction by hash
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status or the body cannot be decoded
    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction, ScorechainError> {
        let url = self.transaction_url(hash)?;
        self.fetch("tx", url).await
    }

    /// Fetch the score of an address in the given direction
    ///
    /// # Arguments
    ///
    /// * `address` - Address to score
    /// * `direction` - Traversal direction, passed through as-is (`incoming`, `outgoing`)
    /// * `depth` - Traversal depth of the transaction graph
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status or the body cannot be decoded
    pub async fn get_scoring(
        &self,
        address: &str,
        direction: &str,
        depth: u64,
    ) -> Result<Scoring, ScorechainError> {
        let url = self.scoring_url(address, direction, depth)?;
        self.fetch("scoring", url).await
    }

    /// URL of the status endpoint
    pub fn status_url(&self) -> Result<Url, ScorechainError> {
        let url = self.endpoint_url(&["status"])?;
        Ok(self.with_token(url))
    }

    /// URL of the transaction endpoint for `hash`
    pub fn transaction_url(&self, hash: &str) -> Result<Url, ScorechainError> {
        let url = self.endpoint_url(&["tx", hash])?;
        Ok(self.with_token(url))
    }

    /// URL of the scoring endpoint
    pub fn scoring_url(
        &self,
        address: &str,
        direction: &str,
        depth: u64,
    ) -> Result<Url, ScorechainError> {
        let mut url = self.endpoint_url(&["scoring", "address", address, direction])?;
        url.query_pairs_mut()
            .append_pair("depth", &depth.to_string())
            .append_pair("pretty", "false");
        Ok(self.with_token(url))
    }

    /// Append path segments to the base URL, keeping any base path prefix
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ScorechainError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ScorechainError::Config(format!(
                    "base URL cannot carry endpoint paths: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn with_token(&self, mut url: Url) -> Url {
        if let Some(token) = &self.config.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, ScorechainError> {
        // the query may carry the token, only the path is logged
        debug!(endpoint, path = url.path(), "requesting Scorechain API");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ScorechainError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                endpoint,
                status = status.as_u16(),
                "Scorechain API error: {message}"
            );
            return Err(ScorechainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(ScorechainError::Http)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
