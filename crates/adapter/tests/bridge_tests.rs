// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the bridge server
//!
//! Each test starts a server on an ephemeral port with a wiremock upstream
//! and talks to it over HTTP.

use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, method, path, query_param},
};

mod fixtures;
use fixtures::*;

async fn post_job(addr: std::net::SocketAddr, body: &Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .json(body)
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body = response.json().await.expect("Failed to decode response");
    (status, body)
}

#[tokio::test]
async fn status_job_completes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(status_response(1_590_138_843, "synced")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(addr, &json!({"id": "run-1", "data": {"endpoint": "get-status"}})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobRunId"], "run-1");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["pending"], false);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["data"]["result"]["state"], "synced");
    assert_eq!(body["data"]["result"]["lastBlock"]["height"], 10_123_456);
}

#[tokio::test]
async fn transaction_job_echoes_hash() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/tx/{TRANSACTION_HASH}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(transaction_response(TRANSACTION_HASH)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(
        addr,
        &json!({"id": 7, "data": {"endpoint": "get-trx", "hash": TRANSACTION_HASH}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobRunId"], 7);
    assert_eq!(body["data"]["result"]["hash"], TRANSACTION_HASH);
    assert_eq!(
        body["data"]["result"]["tokenTransfers"][0]["token"]["symbol"],
        "USDT"
    );
}

#[tokio::test]
async fn scoring_job_accepts_numeric_depth() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/scoring/address/{ADDRESS}/incoming")))
        .and(query_param("depth", "2"))
        .and(query_param("pretty", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scoring_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(
        addr,
        &json!({
            "id": "run-3",
            "data": {"endpoint": "get-scoring", "address": ADDRESS, "direction": "incoming", "depth": 2}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["result"]["scx"], 87);
    assert_eq!(body["data"]["result"]["details"][0]["type"], "Exchange");
}

#[tokio::test]
async fn unsupported_endpoint_job_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(addr, &json!({"id": "run-4", "data": {"endpoint": "get-block"}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["jobRunId"], "run-4");
    assert_eq!(body["status"], "errored");
    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["error"],
        "unrecognized or unsupported Scorechain Ethereum API endpoint"
    );
}

#[tokio::test]
async fn missing_hash_job_errors_without_upstream_call() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(addr, &json!({"id": "run-5", "data": {"endpoint": "get-trx"}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "get-transaction endpoint requires hash parameter");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge(&mock_server).await;
    let (status, body) = post_job(addr, &json!({"id": "run-6", "data": {"endpoint": "get-status"}})).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "errored");
    let error = body["error"].as_str().unwrap_or_default();
    assert!(error.contains("500"), "unexpected error: {error}");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let mock_server = MockServer::start().await;
    let (addr, _token) = start_bridge(&mock_server).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .header("content-type", "application/json")
        .body(r#"{"id": "run-7", "data": {"endpoint": "get-status"}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to decode response");
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn shared_adapter_serves_jobs() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(status_response(1_590_138_843, "out-of-sync")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (addr, _token) = start_bridge_with(adapter(&mock_server, None)).await;
    let (status, body) = post_job(addr, &json!({"data": {"endpoint": "get-status"}})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobRunId"], Value::Null);
    assert_eq!(body["data"]["result"]["state"], "out-of-sync");
}

#[tokio::test]
async fn health_and_metrics_respond() {
    let mock_server = MockServer::start().await;
    let (addr, token) = start_bridge(&mock_server).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let health: Value = response.json().await.expect("Failed to decode response");
    assert_eq!(health["status"], "Up");
    assert_eq!(health["environment"], "testing");

    let response = client
        .get(format!("http://{addr}/metrics"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    token.cancel();
}
