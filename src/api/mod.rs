//! Backend API module
//!
//! This module owns the HTTP contract with the search engine backend:
//! - Building the endpoint URLs and percent-encoded query strings
//! - Issuing exactly one request per logical operation
//! - Decoding the uniform `{result, data|error}` envelope
//!
//! Application failures (`result: false`) are ordinary values of
//! [`ApiResult::Failure`]; only transport problems surface as [`TransportError`].

mod client;
mod envelope;
mod types;

pub use client::{ApiClient, Pagination};
pub use envelope::ApiResult;
pub use types::{
    Acknowledged, SearchResultItem, SearchResults, SiteStat, StatisticsSnapshot, TotalStats,
};

use thiserror::Error;

/// Errors that happen below the envelope: the backend never got to answer
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("Response from {endpoint} (HTTP {status}) is not JSON: {source}")]
    Decode {
        endpoint: String,
        status: u16,
        source: serde_json::Error,
    },

    #[error("Malformed envelope from {endpoint}: {reason}")]
    MalformedEnvelope { endpoint: String, reason: String },

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl TransportError {
    /// Returns the endpoint path the failure relates to, if known
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Request { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::MalformedEnvelope { endpoint, .. } => Some(endpoint.as_str()),
            Self::Url(_) => None,
        }
    }
}
