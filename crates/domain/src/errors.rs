//! Error types used throughout the client
//!
//! Non-2xx responses are mapped into one typed error per status family
//! rather than thrown exceptions; every variant preserves the original
//! status code, the correlation id and (where applicable) the raw response
//! body for diagnostics.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// A single field-level entry from a validation error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationData {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Structured error body returned with `application/vnd.adposting.error+json`
/// responses: `{message, errors: [{field, code, message}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ValidationData>,
}

/// Main error type for the Ad Posting client
#[derive(Error, Debug)]
pub enum AdPostingError {
    /// Authentication failed (401/403), possibly after the single reauth
    /// retry was exhausted.
    #[error("unauthorized{}", format_request_id(request_id))]
    Unauthorized { request_id: Option<String>, body: Option<ErrorBody> },

    /// The target advertisement does not exist (404).
    #[error("advertisement not found{}", format_request_id(request_id))]
    NotFound { request_id: Option<String> },

    /// A resource with the same unique identifier already exists (409).
    /// `location` is the URI of the conflicting resource.
    #[error("advertisement already exists at {location}")]
    AlreadyExists { request_id: Option<String>, location: Url },

    /// The request body failed server-side validation (422).
    #[error("validation failed: {message}")]
    Validation { request_id: Option<String>, message: String, errors: Vec<ValidationData> },

    /// Rate limited (429); `retry_after` carries the server's backoff hint.
    #[error("too many requests{}", format_request_id(request_id))]
    TooManyRequests { request_id: Option<String>, retry_after: Option<Duration> },

    /// Uncategorized non-2xx response; the raw body is kept for diagnostics.
    #[error("request failed with status {status}{}", format_request_id(request_id))]
    RequestFailed { status: u16, body: String, request_id: Option<String> },

    /// A link relation was requested that the current server state does not
    /// expose. This signals an unsupported operation and is a programming
    /// error on the caller's side.
    #[error("relation '{relation}' is not present in the resource links")]
    MissingRelation { relation: String },

    /// `next_page` was called on the last page of a result set.
    #[error("no more results")]
    NoMoreResults,

    /// Client configuration is incomplete or inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connect, timeout, malformed URL).
    #[error("network error: {0}")]
    Network(String),

    /// Request or response body could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invariant violation inside the client itself.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdPostingError {
    /// Correlation id surfaced from the `X-Request-Id` response header,
    /// when the error came from an HTTP response that carried one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { request_id, .. }
            | Self::NotFound { request_id }
            | Self::AlreadyExists { request_id, .. }
            | Self::Validation { request_id, .. }
            | Self::TooManyRequests { request_id, .. }
            | Self::RequestFailed { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AdPostingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for AdPostingError {
    fn from(err: url::ParseError) -> Self {
        Self::Network(format!("invalid URL: {err}"))
    }
}

fn format_request_id(request_id: &Option<String>) -> String {
    match request_id {
        Some(id) => format!(" (request id {id})"),
        None => String::new(),
    }
}

/// Result type alias for Ad Posting client operations
pub type Result<T> = std::result::Result<T, AdPostingError>;
