// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! Canned Scorechain API payloads and mock server helpers

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_TOKEN: &str = "test-token";
pub const TRANSACTION_HASH: &str =
    "0x7ead327c1d8d3ccc5ae619522ffec76334f4d786f84633c1462b968a71a4e8dd";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub fn status_response() -> Value {
    json!({
        "success": true,
        "result": {
            "timestamp": 1_571_239_920,
            "state": "synced",
            "unsyncedBlocks": 0,
            "lastBlock": {
                "hash": "0x5f7b6e8a1e7b1ea29b1a5cf0bfa2d8bbab0e8f3f38a7c4bbf6c9c1b0cd2b3a11",
                "height": 8_754_321,
                "nbtx": 187,
                "date": "2019-10-16T15:31:58.000Z"
            }
        }
    })
}

fn party(address: &str, is_contract: bool) -> Value {
    json!({"address": address, "label": "", "type": null, "isContract": is_contract})
}

pub fn transaction_response(hash: &str) -> Value {
    json!({
        "success": true,
        "result": {
            "hash": hash,
            "block": {
                "hash": "0x9e4f7b8d2c1a3e5f6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f90",
                "height": 5_000_123
            },
            "from": party("0x8d12a197cb00d4747a1fe03395095ce2a5cc6819", false),
            "to": party("0x2a0c0dbecc7e4d658f48e01e3fa353f44050c208", true),
            "gas": {
                "price": 8,
                "quantity": 133_705,
                "used": 33_705,
                "usedPercent": 25.21,
                "cost": 0.000_269_64
            },
            "value": {"ETH": 500, "USD": 512_345.5, "EUR": 432_100.25},
            "timestamp": 1_517_000_000,
            "date": "2018-01-26T20:53:20+00:00",
            "confirmations": 3_017_326,
            "internalTransfers": [
                {
                    "from": party("0x2a0c0dbecc7e4d658f48e01e3fa353f44050c208", true),
                    "to": {
                        "address": "0x00bdb5699745f5b860228c8f939abf1b9ae374ed",
                        "label": "Bitstamp",
                        "type": {"id": 23, "label": "Exchange", "score": 90, "custom": false, "parentId": 0},
                        "isContract": false
                    },
                    "value": {"ETH": 250}
                },
                {
                    "from": party("0x2a0c0dbecc7e4d658f48e01e3fa353f44050c208", true),
                    "to": party("0x1b3cb81e51011b549d78bf720b0d924ac763a7c2", false),
                    "value": {"ETH": 250}
                }
            ],
            "tokenTransfers": []
        }
    })
}

pub fn scoring_response(with_details: bool) -> Value {
    let details = if with_details {
        json!([{
            "address": "0x00bdb5699745f5b860228c8f939abf1b9ae374ed",
            "amount": 1.25,
            "percentage": 100.0,
            "tag": "Bitstamp",
            "type": "Exchange",
            "scx": 90
        }])
    } else {
        json!([])
    };

    json!({"success": true, "result": {"scx": 100, "details": details}})
}

/// Mount a single GET mock answering `route` with `body`
pub async fn mount_json(mock_server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}
