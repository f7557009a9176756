// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the Scorechain Ethereum API
//!
//! [`ScorechainClient`] issues a single `GET` per call against one of three
//! endpoints and decodes the body into the matching [`scorechain_types`]
//! document. It performs no retries and adds no timeout of its own; both
//! concerns belong to the caller.
//!
//! # Outbound requests
//!
//! | method | URL |
//! |---|---|
//! | [`ScorechainClient::get_status`] | `{base}/status` |
//! | [`ScorechainClient::get_transaction`] | `{base}/tx/{hash}` |
//! | [`ScorechainClient::get_scoring`] | `{base}/scoring/address/{address}/{direction}?depth={depth}&pretty=false` |
//!
//! When a token is configured it is appended to every request as the `token`
//! query parameter.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_SCORING_DEPTH, ScorechainClient, ScorechainConfig};
pub use error::ScorechainError;
pub use scorechain_types as types;
