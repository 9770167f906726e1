//! Gate error types.

use thiserror::Error;

use storegate_placement::PlacementError;

/// Errors that can occur while evaluating an admission decision.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("placement service call failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("malformed eviction scheduler name: {0:?}")]
    MalformedSchedulerName(String),

    #[error("malformed eviction payload for scheduler {scheduler:?}: {source}")]
    Payload {
        scheduler: String,
        source: serde_json::Error,
    },
}

impl GateError {
    /// Whether the underlying failure is the benign "cluster not
    /// bootstrapped" signal from the placement service.
    pub fn is_not_bootstrapped(&self) -> bool {
        matches!(self, GateError::Placement(e) if e.is_not_bootstrapped())
    }
}

pub type GateResult<T> = Result<T, GateError>;
