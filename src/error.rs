//! Error types shared by the chart repository, the playlist orchestrator and
//! the HTTP clients underneath them.

use thiserror::Error;

/// Failure kinds surfaced to the presentation layer.
///
/// Transport errors never leave the library raw: every `reqwest::Error` is
/// converted into one of these kinds so callers can decide what to show.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No session identity when an authenticated call was attempted
    #[error("not authenticated")]
    AuthMissing,

    /// Chart or track document absent
    #[error("not found: {0}")]
    LookupNotFound(String),

    /// Transport failure or unexpected HTTP status
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// Save attempted with zero resolvable track identifiers
    #[error("no track of this chart is available for a playlist")]
    EmptySelection,

    /// Remote answered but the body was unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// User supplied date was rejected
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl From<reqwest::Error> for ChartError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChartError::InvalidResponse(err.to_string())
        } else {
            ChartError::NetworkFailure(err.to_string())
        }
    }
}

/// Result type for chart and playlist operations.
pub type Result<T> = std::result::Result<T, ChartError>;
