//! The admission gatekeeper.
//!
//! One decision per incoming pod-creation request: fetch a fresh snapshot of
//! store topology and active leader evictions from the placement service,
//! correlate the pod to a store, and end that store's eviction before the pod
//! is recreated. Fails closed — any placement failure other than the benign
//! "not bootstrapped" signal denies the creation so the platform retries
//! later.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use storegate_placement::{PlacementApi, PlacementResult, StoreInfo};

use crate::correlate::match_store;
use crate::eviction;

/// Identity of the pod whose creation is being admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRef {
    pub name: String,
    pub namespace: String,
}

/// The admission decision for one pod-creation request.
///
/// The only two valid shapes: allowed, or denied with a human-readable
/// reason carrying the underlying failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionVerdict {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AdmissionVerdict {
    /// Permit the creation.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// Block the creation, carrying the underlying failure as the reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether a storage-member pod may be (re)created.
///
/// At most one eviction termination is issued per decision, and no retries
/// are performed here — a failed call surfaces as a deny and the platform's
/// own admission retry drives the next attempt.
pub async fn decide(pod: &PodRef, placement: &impl PlacementApi) -> AdmissionVerdict {
    let stores = match placement.get_stores().await {
        Ok(stores) => stores,
        Err(e) if e.is_not_bootstrapped() => {
            debug!(pod = %pod.name, ns = %pod.namespace, "cluster not bootstrapped, nothing to protect");
            return AdmissionVerdict::allow();
        }
        Err(e) => {
            info!(pod = %pod.name, ns = %pod.namespace, error = %e, "failed to list stores, denying creation");
            return AdmissionVerdict::deny(format!("failed to list stores: {e}"));
        }
    };

    if stores.count < 1 {
        return AdmissionVerdict::allow();
    }

    let schedulers = match placement.get_evict_leader_schedulers().await {
        Ok(schedulers) => schedulers,
        Err(e) if e.is_not_bootstrapped() => {
            debug!(pod = %pod.name, ns = %pod.namespace, "cluster not bootstrapped, nothing to protect");
            return AdmissionVerdict::allow();
        }
        Err(e) => {
            info!(pod = %pod.name, ns = %pod.namespace, error = %e, "failed to list eviction schedulers, denying creation");
            return AdmissionVerdict::deny(format!("failed to list eviction schedulers: {e}"));
        }
    };

    if schedulers.is_empty() {
        return AdmissionVerdict::allow();
    }

    let roster = match eviction::resolve(&schedulers, placement).await {
        Ok(roster) => roster,
        Err(e) => {
            info!(pod = %pod.name, ns = %pod.namespace, error = %e, "failed to resolve eviction targets, denying creation");
            return AdmissionVerdict::deny(format!("failed to resolve eviction targets: {e}"));
        }
    };

    // The pod is about to take over the identity of a store that is
    // mid-eviction; end the eviction so the recreated store resumes
    // leadership duty.
    if let Some(info) = match_store(&stores.stores, &pod.name) {
        if roster.contains(&info.store.id.to_string()) {
            if let Err(e) = end_evict_leader(info, placement).await {
                info!(
                    pod = %pod.name,
                    ns = %pod.namespace,
                    store_id = info.store.id,
                    error = %e,
                    "failed to end leader eviction, denying creation"
                );
                return AdmissionVerdict::deny(format!(
                    "failed to end leader eviction for store {}: {e}",
                    info.store.id
                ));
            }
            info!(
                pod = %pod.name,
                ns = %pod.namespace,
                store_id = info.store.id,
                "ended leader eviction for recreated store"
            );
        }
    }

    AdmissionVerdict::allow()
}

/// End the leader eviction targeting one store.
///
/// A thin delegate to the placement service; errors propagate unchanged and
/// there is no compensation — a failed termination denies the creation and
/// the next admission attempt re-evaluates from scratch.
pub async fn end_evict_leader(
    store: &StoreInfo,
    placement: &impl PlacementApi,
) -> PlacementResult<()> {
    placement.end_evict_leader(store.store.id).await
}
