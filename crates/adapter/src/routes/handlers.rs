// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! The job handler speaks the external-adapter protocol: the caller posts a
//! job carrying an `id` and a `data` object of named parameters, and receives
//! a job run response echoing the id as `jobRunId`.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    adapter::AdapterResult,
    error::AdapterError,
    extractors::JsonExtractor,
    request::AdapterRequest,
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check())
}

/// Inbound job request
#[derive(Debug, Deserialize)]
pub struct JobRequest {
    /// Job run identifier chosen by the caller, echoed back verbatim
    #[serde(default)]
    pub id: Option<Value>,
    /// Adapter parameters
    #[serde(default)]
    pub data: AdapterRequest,
}

/// Final state of a job run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// The adapter returned a result
    Completed,
    /// The adapter returned an error
    Errored,
}

/// Job run response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    /// Identifier of the job run
    pub job_run_id: Option<Value>,
    /// Final state of the run
    pub status: JobStatus,
    /// Always `false`, the adapter answers synchronously
    pub pending: bool,
    /// Scorechain document on success
    pub data: Option<AdapterResult>,
    /// Error message on failure
    pub error: Option<String>,
}

impl JobResponse {
    /// Response for a successful run
    pub fn completed(job_run_id: Option<Value>, result: AdapterResult) -> Self {
        Self {
            job_run_id,
            status: JobStatus::Completed,
            pending: false,
            data: Some(result),
            error: None,
        }
    }

    /// Response for a failed run
    pub fn errored(job_run_id: Option<Value>, error: &AdapterError) -> Self {
        Self {
            job_run_id,
            status: JobStatus::Errored,
            pending: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

/// Run one job through the adapter
///
/// Validation failures answer `400`, Scorechain failures `502`; both carry
/// the error message in the job run body.
pub async fn job_handler(
    State(state): State<ServerState>,
    JsonExtractor(job): JsonExtractor<JobRequest>,
) -> (StatusCode, Json<JobResponse>) {
    match state.adapter().execute(&job.data).await {
        Ok(result) => {
            info!(job_run_id = ?job.id, "job run completed");
            (StatusCode::OK, Json(JobResponse::completed(job.id, result)))
        }
        Err(e) => {
            if e.is_validation() {
                debug!(job_run_id = ?job.id, error = %e, "job run rejected");
            } else {
                error!(job_run_id = ?job.id, error = %e, "job run errored");
            }
            (e.status_code(), Json(JobResponse::errored(job.id, &e)))
        }
    }
}
