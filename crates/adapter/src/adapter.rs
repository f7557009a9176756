// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request dispatch
//!
//! An inbound [`AdapterRequest`] names the operation to run in its `endpoint`
//! parameter. [`Operation::from_request`] selects and validates the operation
//! without touching the network; [`Adapter::run`] then issues exactly one
//! Scorechain API call for it.
//!
//! | endpoint | required | optional | result |
//! |---|---|---|---|
//! | `get-status` | | | [`Status`] |
//! | `get-trx` | `hash` | | [`Transaction`] |
//! | `get-scoring` | `address`, `direction` | `depth` (default 3) | [`Scoring`] |

use std::time::Instant;

use scorechain_client::{DEFAULT_SCORING_DEPTH, ScorechainClient};
use scorechain_types::{Scoring, Status, Transaction};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{error::AdapterError, metrics, request::AdapterRequest};

/// Endpoint value selecting the status operation
pub const GET_STATUS: &str = "get-status";
/// Endpoint value selecting the transaction lookup
pub const GET_TRX: &str = "get-trx";
/// Endpoint value selecting the address scoring
pub const GET_SCORING: &str = "get-scoring";

const UNSUPPORTED_LABEL: &str = "unsupported";

const MISSING_HASH: &str = "get-transaction endpoint requires hash parameter";
const MISSING_ADDRESS_OR_DIRECTION: &str =
    "get-scoring endpoint requires address and direction parameters";

/// A validated Scorechain operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Synchronisation status of the data source
    Status,
    /// Transaction lookup by hash
    Transaction {
        /// Transaction hash
        hash: String,
    },
    /// Risk scoring of an address
    Scoring {
        /// Address to score
        address: String,
        /// Traversal direction, forwarded unchanged
        direction: String,
        /// Traversal depth
        depth: u64,
    },
}

impl Operation {
    /// Select and validate the operation named by the request's `endpoint`
    ///
    /// A `depth` that is absent, negative, non-numeric or wider than 64 bits
    /// falls back to [`DEFAULT_SCORING_DEPTH`] rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MissingParameter`] when a required parameter is
    /// absent and [`AdapterError::UnsupportedEndpoint`] for any other endpoint
    /// value, including a missing one.
    pub fn from_request(request: &AdapterRequest) -> Result<Self, AdapterError> {
        match request.param("endpoint") {
            Some(GET_STATUS) => Ok(Self::Status),
            Some(GET_TRX) => {
                let hash = request
                    .param("hash")
                    .ok_or(AdapterError::MissingParameter {
                        endpoint: GET_TRX,
                        message: MISSING_HASH,
                    })?;
                Ok(Self::Transaction {
                    hash: hash.to_string(),
                })
            }
            Some(GET_SCORING) => {
                let (Some(address), Some(direction)) =
                    (request.param("address"), request.param("direction"))
                else {
                    return Err(AdapterError::MissingParameter {
                        endpoint: GET_SCORING,
                        message: MISSING_ADDRESS_OR_DIRECTION,
                    });
                };

                let depth = request
                    .param("depth")
                    .and_then(|depth| depth.trim().parse().ok())
                    .unwrap_or(DEFAULT_SCORING_DEPTH);

                Ok(Self::Scoring {
                    address: address.to_string(),
                    direction: direction.to_string(),
                    depth,
                })
            }
            other => Err(AdapterError::UnsupportedEndpoint {
                endpoint: other.map(ToString::to_string),
            }),
        }
    }

    /// Endpoint value naming this operation
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Status => GET_STATUS,
            Self::Transaction { .. } => GET_TRX,
            Self::Scoring { .. } => GET_SCORING,
        }
    }
}

/// Typed result of a successful operation
///
/// Serializes as the bare Scorechain document, without a variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdapterResult {
    /// Result of `get-status`
    Status(Status),
    /// Result of `get-trx`
    Transaction(Transaction),
    /// Result of `get-scoring`
    Scoring(Scoring),
}

/// Routes adapter requests to the Scorechain API
#[derive(Debug, Clone)]
pub struct Adapter {
    client: ScorechainClient,
}

impl Adapter {
    /// Create an adapter backed by the given client
    pub fn new(client: ScorechainClient) -> Self {
        Self { client }
    }

    /// Validate the request and run the selected operation
    ///
    /// Validation failures return before any network call. Otherwise exactly
    /// one request is sent to the Scorechain API.
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing parameters or unknown
    /// endpoints, and [`AdapterError::Upstream`] when the API call fails.
    pub async fn execute(&self, request: &AdapterRequest) -> Result<AdapterResult, AdapterError> {
        let operation = Operation::from_request(request).inspect_err(|error| {
            let label = match error {
                AdapterError::MissingParameter { endpoint, .. } => *endpoint,
                _ => UNSUPPORTED_LABEL,
            };
            debug!(endpoint = label, %error, "rejected adapter request");
            metrics::inc_adapter_requests(label, "rejected");
        })?;

        self.run(&operation).await
    }

    /// Run an already validated operation
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Upstream`] when the API call fails.
    pub async fn run(&self, operation: &Operation) -> Result<AdapterResult, AdapterError> {
        let endpoint = operation.endpoint();
        let start_time = Instant::now();

        let result = match operation {
            Operation::Status => self.client.get_status().await.map(AdapterResult::Status),
            Operation::Transaction { hash } => self
                .client
                .get_transaction(hash)
                .await
                .map(AdapterResult::Transaction),
            Operation::Scoring {
                address,
                direction,
                depth,
            } => self
                .client
                .get_scoring(address, direction, *depth)
                .await
                .map(AdapterResult::Scoring),
        };

        let elapsed = start_time.elapsed();
        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::observe_upstream_duration(endpoint, outcome, elapsed.as_secs_f64());
        metrics::inc_adapter_requests(endpoint, outcome);

        match &result {
            Ok(AdapterResult::Status(status)) if !status.result.is_synced() => warn!(
                endpoint,
                ?elapsed,
                state = %status.result.state,
                unsynced_blocks = status.result.unsynced_blocks,
                "Scorechain data source is behind the chain head"
            ),
            Ok(_) => info!(endpoint, ?elapsed, "Scorechain request completed"),
            Err(error) => warn!(endpoint, ?elapsed, %error, "Scorechain request failed"),
        }

        result.map_err(AdapterError::Upstream)
    }
}
