//! storegate-api — HTTP boundary for the admission gate.
//!
//! The orchestration platform posts a parsed workload-creation request here
//! and gets back an allow/deny verdict. Transport concerns above this point
//! (TLS, admission-review envelope decoding) belong to the platform side.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | POST | `/admission/pods` | Admit one storage-member pod creation |
//! | GET | `/healthz` | Liveness probe |

pub mod handlers;

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};

use storegate_placement::EndpointResolver;

/// Shared state for admission handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Resolves the placement-service URL for a request's owning cluster.
    pub endpoints: EndpointResolver,
    /// Per-call timeout applied to placement requests.
    pub timeout: Duration,
}

/// Build the admission router.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/admission/pods", post(handlers::admit_pod))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
