// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction endpoint types

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::{ApiResponse, status::Block};

/// Response of the transaction endpoint
pub type Transaction = ApiResponse<TransactionResult>;

/// Payload of the transaction endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionResult {
    /// Transaction hash
    #[serde_as(as = "DefaultOnNull")]
    pub hash: String,
    /// Block containing the transaction
    #[serde_as(as = "DefaultOnNull")]
    pub block: Block,
    /// Sending party
    #[serde_as(as = "DefaultOnNull")]
    pub from: TransactionParty,
    /// Receiving party
    #[serde_as(as = "DefaultOnNull")]
    pub to: TransactionParty,
    /// Gas metrics
    #[serde_as(as = "DefaultOnNull")]
    pub gas: Gas,
    /// Transferred value in several currencies
    #[serde_as(as = "DefaultOnNull")]
    pub value: Values,
    /// Unix timestamp (seconds) of the block
    #[serde_as(as = "DefaultOnNull")]
    pub timestamp: i64,
    /// Block date as reported by the API
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    /// Blocks mined on top of the containing block
    #[serde_as(as = "DefaultOnNull")]
    pub confirmations: u64,
    /// Value transfers performed by contract execution
    #[serde_as(as = "DefaultOnNull")]
    pub internal_transfers: Vec<Transfer>,
    /// ERC token transfers emitted by the transaction
    #[serde_as(as = "DefaultOnNull")]
    pub token_transfers: Vec<TokenTransfer>,
}

/// Sender or receiver of a transaction or transfer
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionParty {
    /// Ethereum address
    #[serde_as(as = "DefaultOnNull")]
    pub address: String,
    /// Entity label, empty when the address is unknown to Scorechain
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    /// Entity classification, absent when unknown
    #[serde(rename = "type")]
    pub address_type: Option<AddressType>,
    /// Whether the address is a contract
    #[serde_as(as = "DefaultOnNull")]
    pub is_contract: bool,
}

/// Scorechain classification of an address (exchange, mixer, ...)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressType {
    /// Classification identifier
    #[serde_as(as = "DefaultOnNull")]
    pub id: i64,
    /// Human readable classification
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    /// Risk score attached to the classification
    #[serde_as(as = "DefaultOnNull")]
    pub score: i64,
    /// Whether the classification is user defined
    #[serde_as(as = "DefaultOnNull")]
    pub custom: bool,
    /// Parent classification identifier
    #[serde_as(as = "DefaultOnNull")]
    pub parent_id: i64,
}

/// Gas usage of a transaction
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gas {
    /// Gas price
    #[serde_as(as = "DefaultOnNull")]
    pub price: u64,
    /// Gas limit
    #[serde_as(as = "DefaultOnNull")]
    pub quantity: u64,
    /// Gas consumed
    #[serde_as(as = "DefaultOnNull")]
    pub used: u64,
    /// Gas consumed as a percentage of the limit
    #[serde_as(as = "DefaultOnNull")]
    pub used_percent: f64,
    /// Fee paid in ETH
    #[serde_as(as = "DefaultOnNull")]
    pub cost: f64,
}

/// An amount expressed in ETH and in fiat/crypto counter-currencies
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub struct Values {
    #[serde_as(as = "DefaultOnNull")]
    pub eth: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub aud: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub brl: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub cad: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub chf: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub cny: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub eur: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub gbp: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub hkd: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub ils: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub jpy: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub krw: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub mxn: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub nok: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub nzd: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub pln: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub rub: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub sek: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub sgd: f64,
    #[serde(rename = "TRY")]
    #[serde_as(as = "DefaultOnNull")]
    pub try_: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub usd: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub btc: f64,
}

/// A value movement between two parties
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    /// Sending party
    #[serde_as(as = "DefaultOnNull")]
    pub from: TransactionParty,
    /// Receiving party
    #[serde_as(as = "DefaultOnNull")]
    pub to: TransactionParty,
    /// Transferred value
    #[serde_as(as = "DefaultOnNull")]
    pub value: Values,
}

/// A token transfer: the plain transfer plus token specific data
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenTransfer {
    /// Parties and token amount
    #[serde(flatten)]
    pub transfer: Transfer,
    /// Token amount converted to counter-currencies
    #[serde_as(as = "DefaultOnNull")]
    pub counter_values: Values,
    /// Token contract, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
}

/// An ERC token contract
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Contract address
    #[serde_as(as = "DefaultOnNull")]
    pub address: String,
    /// Token name
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    /// Token symbol
    #[serde_as(as = "DefaultOnNull")]
    pub symbol: String,
}
