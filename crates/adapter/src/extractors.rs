// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Custom extractors for improved error handling
//!
//! [`JsonExtractor`] replaces Axum's `Json` extractor so that malformed job
//! requests are rejected with a [`ServerError::JsonError`] carrying a hint
//! about what is wrong with the body.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

mod error_hints {
    pub const MISSING_COMMA: &str =
        "check for missing or extra commas between object properties or array elements";
    pub const MISSING_BRACE: &str = "check for missing closing brace '}' for JSON object";
    pub const MISSING_BRACKET: &str = "check for missing closing bracket ']' for JSON array";
    pub const MISSING_QUOTES: &str =
        "check for missing or improperly escaped quotes around string values";
    pub const EXPECTED_VALUE: &str =
        "expected a valid JSON value (string, number, boolean, null, object, or array)";
    pub const DEFAULT_SYNTAX: &str = "check JSON formatting and structure";
    pub const EMPTY_BODY: &str = "request body is empty, expected valid JSON";
    pub const TRUNCATED_JSON: &str =
        "unexpected end of JSON input, request appears to be truncated";
}

const MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

/// Custom JSON extractor that provides detailed error messages for parsing failures
#[derive(Debug)]
pub struct JsonExtractor<T>(pub T);

impl<T, S> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get("content-type")
            && let Ok(content_type_str) = content_type.to_str()
            && !content_type_str.starts_with("application/json")
        {
            return Err(ServerError::JsonError {
                message: format!(
                    "invalid content-type: expected 'application/json', got '{content_type_str}'"
                ),
            });
        }

        let bytes = axum::body::Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::JsonError {
                message: format!("failed to read request body: {rejection}"),
            })?;

        if bytes.len() > MAX_JSON_PAYLOAD_SIZE {
            return Err(ServerError::JsonError {
                message: format!(
                    "request body too large: {} bytes (max: {} bytes)",
                    bytes.len(),
                    MAX_JSON_PAYLOAD_SIZE
                ),
            });
        }

        if bytes.is_empty() {
            return Err(ServerError::JsonError {
                message: error_hints::EMPTY_BODY.to_string(),
            });
        }

        serde_json::from_slice::<T>(&bytes)
            .map(JsonExtractor)
            .map_err(|err| ServerError::JsonError {
                message: describe_json_error(&err),
            })
    }
}

fn describe_json_error(err: &serde_json::Error) -> String {
    if err.is_syntax() {
        format!(
            "invalid JSON syntax at line {}, column {}: {}",
            err.line(),
            err.column(),
            syntax_hint(err)
        )
    } else if err.is_eof() {
        error_hints::TRUNCATED_JSON.to_string()
    } else if err.is_data() {
        format!("JSON data validation failed: {err}")
    } else {
        format!("JSON parsing error: {err}")
    }
}

fn syntax_hint(err: &serde_json::Error) -> &'static str {
    let err_msg = err.to_string();

    if err_msg.contains("expected ','") || err_msg.contains("trailing comma") {
        error_hints::MISSING_COMMA
    } else if err_msg.contains("expected '}'") {
        error_hints::MISSING_BRACE
    } else if err_msg.contains("expected ']'") {
        error_hints::MISSING_BRACKET
    } else if err_msg.contains("expected '\"'") {
        error_hints::MISSING_QUOTES
    } else if err_msg.contains("expected value") {
        error_hints::EXPECTED_VALUE
    } else {
        error_hints::DEFAULT_SYNTAX
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Method};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        id: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(request: Request) -> Result<JsonExtractor<Payload>, ServerError> {
        JsonExtractor::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn valid_json() {
        let JsonExtractor(payload) = extract(json_request(r#"{"id": "1"}"#)).await.unwrap();
        assert_eq!(payload.id, "1");
    }

    #[tokio::test]
    async fn empty_body() {
        let error = extract(json_request("")).await.unwrap_err();
        assert!(error.to_string().contains(error_hints::EMPTY_BODY));
    }

    #[tokio::test]
    async fn syntax_error_reports_position() {
        let error = extract(json_request(r#"{"id": "1",}"#)).await.unwrap_err();
        assert!(error.to_string().contains("line 1"), "{error}");
    }

    #[tokio::test]
    async fn truncated_body() {
        let error = extract(json_request(r#"{"id": "1""#)).await.unwrap_err();
        assert!(error.to_string().contains(error_hints::TRUNCATED_JSON), "{error}");
    }

    #[tokio::test]
    async fn wrong_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header("content-type", "text/plain")
            .body(Body::from(r#"{"id": "1"}"#))
            .unwrap();
        let error = extract(request).await.unwrap_err();
        assert!(error.to_string().contains("invalid content-type"));
    }
}
