//! Error types for fetching and formatting alert data.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single GET against the alerts API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} timed out: {source}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned status {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("Response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Sort a reqwest failure into timeout, connect or generic request errors.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            FetchError::Timeout { url, source }
        } else if source.is_connect() {
            FetchError::Connect { url, source }
        } else {
            FetchError::Request { url, source }
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::Connect { .. } => FetchErrorKind::Connect,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
            FetchError::Request { .. } => FetchErrorKind::Request,
        }
    }
}

/// Machine-readable category of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Timeout,
    Connect,
    Status,
    Decode,
    Request,
}

/// Error value handed back to the tool caller instead of a protocol error.
///
/// Serializes as `{"error": "<description>", "kind": "<category>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub kind: FetchErrorKind,
}

impl From<&FetchError> for ErrorResult {
    fn from(err: &FetchError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("`features` must be an array, got {found}")]
    FeaturesNotSequence { found: &'static str },
}
