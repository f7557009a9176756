// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response schema types for the Scorechain Ethereum API
//!
//! This crate mirrors the JSON documents returned by the three Scorechain
//! endpoints the adapter talks to. The types carry no behaviour beyond a few
//! read-only helpers; they are deserialized straight from the remote payload
//! and serialized back unchanged when the bridge replies to its caller.
//!
//! Every document is wrapped in the same `{ "success": .., "result": .. }`
//! envelope, modelled once as [`ApiResponse`].
//!
//! - [`status`]: synchronisation state of the data source
//! - [`transaction`]: a single transaction with parties, gas, values and transfers
//! - [`scoring`]: risk scoring of an address in a traversal direction

pub mod response;
pub mod scoring;
pub mod status;
pub mod transaction;

pub use response::ApiResponse;
pub use scoring::{Scoring, ScoringDetail, ScoringResult};
pub use status::{Block, State, Status, StatusBlock, StatusResult};
pub use transaction::{
    AddressType, Gas, Token, TokenTransfer, Transaction, TransactionParty, TransactionResult,
    Transfer, Values,
};
