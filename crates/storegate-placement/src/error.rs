//! Placement client error types.

use std::time::Duration;

use thiserror::Error;

/// Trailing fragment of the error text the storage cluster reports while it
/// has no data or topology yet. Recognizing it turns the failure into a
/// benign "nothing to do" signal rather than an outage.
pub const NOT_BOOTSTRAPPED_FRAGMENT: &str =
    "TiKV cluster not bootstrapped, please start TiKV first";

/// Errors that can occur talking to the placement service.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("failed to reach placement service at {url}: {source}")]
    Transport { url: String, source: anyhow::Error },

    #[error("placement service returned {status} for {url}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("failed to decode placement response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}

impl PlacementError {
    /// Whether this is the distinguished "cluster not bootstrapped" signal.
    ///
    /// The cluster wraps the upstream message in a trailing quote and
    /// newline; both are tolerated when matching the fragment.
    pub fn is_not_bootstrapped(&self) -> bool {
        match self {
            PlacementError::Api { message, .. } => message
                .trim_end()
                .trim_end_matches('"')
                .ends_with(NOT_BOOTSTRAPPED_FRAGMENT),
            _ => false,
        }
    }
}

pub type PlacementResult<T> = Result<T, PlacementError>;
