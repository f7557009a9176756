// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Scorechain Ethereum API bridge adapter
//!
//! This crate turns a generic parameterized job request into one of three
//! Scorechain Ethereum API calls (status, transaction lookup, address
//! scoring) and hands the typed response back to the caller. The dispatch
//! logic lives in [`adapter`] and can be used on its own; the rest of the
//! crate hosts it behind an Axum server speaking the external-adapter job
//! protocol.
//!
//! # Module Structure
//!
//! - [`request`]: Named string parameters of an inbound job
//! - [`adapter`]: Operation selection, parameter validation and execution
//! - [`config`]: Server and Scorechain configuration with hierarchical loading
//! - [`error`]: Adapter and server errors, HTTP response mapping
//! - [`state`]: Shared application state handed to handlers
//! - [`server`]: Server lifecycle and coordinated shutdown
//! - [`routes`]: Route table and HTTP handlers
//! - [`extractors`]: JSON body extractor with descriptive rejections
//! - [`metrics`]: Prometheus counters and histograms
//!
//! # Request Flow
//!
//! ```text
//! POST / {"id", "data"} → AdapterRequest → Operation → ScorechainClient GET → AdapterResult → job response
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod extractors;
pub mod metrics;
pub mod request;
pub mod routes;
pub mod server;
pub mod state;

pub use adapter::{Adapter, AdapterResult, Operation};
pub use config::{Environment, ServerConfig};
pub use error::{AdapterError, ServerError, ServerResult};
pub use request::AdapterRequest;
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
