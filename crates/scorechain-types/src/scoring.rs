// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Address scoring endpoint types

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::ApiResponse;

/// Response of the scoring endpoint
pub type Scoring = ApiResponse<ScoringResult>;

/// Payload of the scoring endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringResult {
    /// Aggregate score of the address
    #[serde_as(as = "DefaultOnNull")]
    pub scx: i64,
    /// Counterparties contributing to the score
    #[serde_as(as = "DefaultOnNull")]
    pub details: Vec<ScoringDetail>,
}

/// A counterparty contributing to an address score
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringDetail {
    /// Counterparty address
    #[serde_as(as = "DefaultOnNull")]
    pub address: String,
    /// Amount exchanged with the counterparty
    #[serde_as(as = "DefaultOnNull")]
    pub amount: f64,
    /// Share of the total amount
    #[serde_as(as = "DefaultOnNull")]
    pub percentage: f64,
    /// Entity tag of the counterparty
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    /// Entity type of the counterparty
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub kind: String,
    /// Score of the counterparty
    #[serde_as(as = "DefaultOnNull")]
    pub scx: i64,
}
