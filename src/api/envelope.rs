//! Decoding of the `{result, data|error}` envelope shared by every endpoint

use crate::api::TransportError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Application-level outcome of one backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// `result: true` with the type-specific payload
    Success(T),
    /// `result: false` with the backend's error message, verbatim
    Failure(String),
}

impl<T> ApiResult<T> {
    /// Returns true for `result: true`
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Maps the success payload, leaving failures untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }
}

/// Decodes a response body into an envelope
///
/// The HTTP status is only carried for diagnostics: the backend answers some
/// application failures with 4xx/5xx, and those bodies are still envelopes.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    endpoint: &str,
    status: u16,
    body: &str,
) -> Result<ApiResult<T>, TransportError> {
    let value: Value = serde_json::from_str(body).map_err(|source| TransportError::Decode {
        endpoint: endpoint.to_string(),
        status,
        source,
    })?;

    let malformed = |reason: String| TransportError::MalformedEnvelope {
        endpoint: endpoint.to_string(),
        reason,
    };

    let result = value
        .get("result")
        .and_then(Value::as_bool)
        .ok_or_else(|| malformed("missing boolean `result` field".to_string()))?;

    if !result {
        return match value.get("error").and_then(Value::as_str) {
            Some(error) => Ok(ApiResult::Failure(error.to_string())),
            None => Err(malformed("`result` is false but `error` is missing".to_string())),
        };
    }

    serde_json::from_value(value)
        .map(ApiResult::Success)
        .map_err(|e| malformed(format!("unexpected success payload: {}", e)))
}
