// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! Shared fixtures for adapter integration tests
//!
//! Canned Scorechain payloads and helpers wiring an adapter or a running
//! bridge server to a wiremock upstream.

use std::{net::SocketAddr, sync::Arc};

use adapter::{Adapter, AdapterRequest, Server, ServerConfig, ShutdownConfig, config::ScorechainSettings};
use scorechain_client::{ScorechainClient, ScorechainConfig};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "bridge-token";
pub const TRANSACTION_HASH: &str =
    "0xd7f1b5a7c2a3b4e1f2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f6071829";
pub const ADDRESS: &str = "0x00bdb5699745f5b860228c8f939abf1b9ae374ed";

/// Build a request from name/value pairs
pub fn request(pairs: &[(&str, &str)]) -> AdapterRequest {
    pairs.iter().copied().collect()
}

/// Adapter pointed at the mock server
pub fn adapter(mock_server: &MockServer, token: Option<&str>) -> Adapter {
    let config =
        ScorechainConfig::parse(&mock_server.uri(), token.map(ToString::to_string)).unwrap();
    Adapter::new(ScorechainClient::new(config).unwrap())
}

/// Start a bridge server whose upstream is the mock server
pub async fn start_bridge(mock_server: &MockServer) -> (SocketAddr, CancellationToken) {
    let settings = ScorechainSettings {
        url: mock_server.uri(),
        token: Some(TEST_TOKEN.to_string()),
    };
    let config = ServerConfig::for_testing().with_scorechain(settings);

    Server::new(config, ShutdownConfig::default())
        .expect("Failed to create server")
        .run_for_testing()
        .await
        .expect("Failed to start test server")
}

/// Start a bridge server sharing an already built adapter
pub async fn start_bridge_with(adapter: Adapter) -> (SocketAddr, CancellationToken) {
    Server::with_adapter(
        ServerConfig::for_testing(),
        ShutdownConfig::default(),
        Arc::new(adapter),
    )
    .run_for_testing()
    .await
    .expect("Failed to start test server")
}

pub fn status_response(timestamp: i64, state: &str) -> Value {
    json!({
        "success": true,
        "result": {
            "timestamp": timestamp,
            "state": state,
            "unsyncedBlocks": 2,
            "lastBlock": {
                "hash": "0x3c1a5e7f9b2d4f6a8c0e2a4c6e8a0c2e4a6c8e0a2c4e6a8c0e2a4c6e8a0c2e4a",
                "height": 10_123_456,
                "nbtx": 142,
                "date": "2020-05-22T09:14:03.000Z"
            }
        }
    })
}

pub fn transaction_response(hash: &str) -> Value {
    json!({
        "success": true,
        "result": {
            "hash": hash,
            "block": {"hash": "0x01", "height": 10_123_400},
            "from": {"address": ADDRESS, "label": "Bitstamp", "isContract": false},
            "to": {"address": "0xdac17f958d2ee523a2206206994597c13d831ec7", "label": "Tether", "isContract": true},
            "gas": {"price": 20, "quantity": 60_000, "used": 41_309, "usedPercent": 68.85, "cost": 0.000_826},
            "value": {"ETH": 0, "USD": 0},
            "timestamp": 1_590_138_843,
            "date": "2020-05-22T09:14:03+00:00",
            "confirmations": 12,
            "internalTransfers": [],
            "tokenTransfers": [{
                "from": {"address": ADDRESS, "label": "Bitstamp", "isContract": false},
                "to": {"address": "0x5041ed759dd4afc3a72b8192c143f72f4724081a", "label": "", "isContract": false},
                "value": {"ETH": 0.0},
                "counterValues": {"USD": 1500.3},
                "token": {"address": "0xdac17f958d2ee523a2206206994597c13d831ec7", "name": "Tether USD", "symbol": "USDT"}
            }]
        }
    })
}

pub fn scoring_response() -> Value {
    json!({
        "success": true,
        "result": {
            "scx": 87,
            "details": [{
                "address": "0x5041ed759dd4afc3a72b8192c143f72f4724081a",
                "amount": 10.5,
                "percentage": 100.0,
                "tag": "Binance",
                "type": "Exchange",
                "scx": 87
            }]
        }
    })
}
