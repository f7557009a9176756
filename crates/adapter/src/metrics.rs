// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry and an
//! Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::{HistogramVec, IntCounterVec, TEXT_FORMAT, TextEncoder};
use tracing::error;

/// Adapter requests, labeled by endpoint and outcome (`success`, `error`, `rejected`)
pub static ADAPTER_REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    prometheus::register_int_counter_vec!(
        "scorechain_adapter_requests_total",
        "Total number of adapter requests, labeled by endpoint and outcome",
        &["endpoint", "outcome"]
    )
    .expect("Failed to create scorechain_adapter_requests_total counter vec")
});

/// Histogram for Scorechain API request durations in seconds
pub static UPSTREAM_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    prometheus::register_histogram_vec!(
        "scorechain_adapter_upstream_request_duration",
        "Scorechain API request durations in seconds",
        &["endpoint", "result"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create upstream request duration histogram")
});

/// Increment the adapter request counter
///
/// # Arguments
/// * `endpoint` - Operation endpoint, or `unsupported`
/// * `outcome` - `success`, `error` or `rejected`
pub fn inc_adapter_requests(endpoint: &str, outcome: &str) {
    ADAPTER_REQUESTS
        .with_label_values(&[endpoint, outcome])
        .inc();
}

/// Observe the duration of a Scorechain API request
///
/// # Arguments
/// * `endpoint` - Operation endpoint
/// * `result` - `success` or `error`
/// * `duration_secs` - The duration of the request in seconds
pub fn observe_upstream_duration(endpoint: &str, result: &str, duration_secs: f64) {
    UPSTREAM_REQUEST_DURATION
        .with_label_values(&[endpoint, result])
        .observe(duration_secs);
}

/// Axum handler that exports metrics in Prometheus text format
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = String::new();

    match encoder.encode_utf8(&metric_families, &mut buffer) {
        Ok(()) => ([(header::CONTENT_TYPE, TEXT_FORMAT)], buffer).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
