//! Admission handlers.
//!
//! Each request carries its owning cluster reference; the handler resolves
//! that cluster's placement endpoint, builds a fresh client (no caching
//! across decisions), and runs the gate.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::debug;

use storegate_gate::{AdmissionVerdict, PodRef, decide};
use storegate_placement::PlacementClient;

use crate::ApiState;

/// A parsed workload-creation request: the pod's identity and the storage
/// cluster it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionRequest {
    pub name: String,
    pub namespace: String,
    pub cluster: String,
}

/// POST /admission/pods
///
/// Always answers 200; the verdict payload says allow or deny.
pub async fn admit_pod(
    State(state): State<ApiState>,
    Json(req): Json<AdmissionRequest>,
) -> Json<AdmissionVerdict> {
    let url = state.endpoints.resolve(&req.cluster, &req.namespace);
    debug!(
        pod = %req.name,
        ns = %req.namespace,
        cluster = %req.cluster,
        placement = %url,
        "evaluating pod-creation admission"
    );

    let placement = PlacementClient::new(url).with_timeout(state.timeout);
    let pod = PodRef {
        name: req.name,
        namespace: req.namespace,
    };
    Json(decide(&pod, &placement).await)
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
