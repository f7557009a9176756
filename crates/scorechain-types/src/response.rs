// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Common response envelope

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Envelope shared by every Scorechain API response
///
/// Missing or `null` members decode to their default value, so a bare `{}`
/// body yields `success == false` with an empty result rather than a decode
/// error.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de> + Default"
    )
)]
pub struct ApiResponse<T> {
    /// Whether the remote API reported success
    #[serde_as(as = "DefaultOnNull")]
    pub success: bool,
    /// Endpoint specific payload
    #[serde_as(as = "DefaultOnNull")]
    pub result: T,
}
