// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Status endpoint types
//!
//! The status endpoint reports how far the Scorechain indexer is behind the
//! chain head and which block it processed last.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::ApiResponse;

/// Response of the status endpoint
pub type Status = ApiResponse<StatusResult>;

/// Synchronisation state of the Scorechain data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    /// Indexer is at the chain head
    Synced,
    /// Indexer is catching up
    #[default]
    Syncing,
    /// Indexer has fallen behind and is not progressing
    OutOfSync,
}

impl State {
    /// Wire representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Synced => "synced",
            State::Syncing => "syncing",
            State::OutOfSync => "out-of-sync",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Ethereum block reference
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Block hash
    #[serde_as(as = "DefaultOnNull")]
    pub hash: String,
    /// Block height
    #[serde_as(as = "DefaultOnNull")]
    pub height: i64,
}

/// Last block processed by the indexer
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBlock {
    /// Hash and height of the block
    #[serde(flatten)]
    pub block: Block,
    /// Number of transactions in the block
    #[serde_as(as = "DefaultOnNull")]
    pub nbtx: i64,
    /// Block date as reported by the API
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
}

/// Payload of the status endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusResult {
    /// Unix timestamp (seconds) of the status snapshot
    #[serde_as(as = "DefaultOnNull")]
    pub timestamp: i64,
    /// Current synchronisation state
    #[serde_as(as = "DefaultOnNull")]
    pub state: State,
    /// Number of blocks not yet indexed
    #[serde_as(as = "DefaultOnNull")]
    pub unsynced_blocks: u64,
    /// Last indexed block
    #[serde_as(as = "DefaultOnNull")]
    pub last_block: StatusBlock,
}

impl StatusResult {
    /// Whether the indexer reports being at the chain head
    pub fn is_synced(&self) -> bool {
        self.state == State::Synced
    }
}
