//! Error types for Glif runs.

use crate::config::ConfigError;
use thiserror::Error;

/// Failure of a single Glif invocation.
///
/// The `Display` text of every variant is what ends up after
/// `"Failed to run Glif: "` in a failure reply.
#[derive(Debug, Error)]
pub enum GlifError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid run request: {0}")]
    InvalidRequest(String),

    /// Non-success HTTP status; carries the status text.
    #[error("Glif API error: {0}")]
    TransportError(String),

    #[error("Glif request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid Glif response: {0}")]
    InvalidResponse(String),

    /// The call succeeded but the result carried an `error` field.
    #[error("{0}")]
    LogicError(String),
}

impl From<reqwest::Error> for GlifError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GlifError::InvalidResponse(err.to_string())
        } else {
            GlifError::RequestFailed(err.to_string())
        }
    }
}
