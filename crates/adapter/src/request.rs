// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Inbound adapter request parameters

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Named string parameters of a single adapter invocation
///
/// Callers send a JSON object; scalar members are kept in their string form
/// (`2` becomes `"2"`, `true` becomes `"true"`) while `null`, arrays and
/// objects are dropped. A blank value reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AdapterRequest {
    params: HashMap<String, String>,
}

impl AdapterRequest {
    /// Value of a parameter, `None` when missing or blank
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

impl From<Map<String, Value>> for AdapterRequest {
    fn from(object: Map<String, Value>) -> Self {
        let params = object
            .into_iter()
            .filter_map(|(name, value)| {
                let value = match value {
                    Value::String(value) => value,
                    Value::Number(number) => number.to_string(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => return None,
                };
                Some((name, value))
            })
            .collect();

        Self { params }
    }
}

impl<K, V> FromIterator<(K, V)> for AdapterRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
