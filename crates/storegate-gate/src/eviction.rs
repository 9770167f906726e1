//! Eviction roster resolution.
//!
//! The placement service has represented active leader evictions in two wire
//! formats across versions: one scheduler per store with the store id encoded
//! in the scheduler name, and a single shared scheduler whose targets are
//! listed in a JSON payload inside the global configuration. The resolver
//! detects the format from the shape of the scheduler-name list and produces
//! the set of store ids currently under eviction either way.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use storegate_placement::{EVICT_LEADER_SCHEDULER, PlacementApi};

use crate::error::{GateError, GateResult};

/// Wire form of one `schedulers-payload` entry for the shared eviction
/// scheduler. Only the keys (store ids) are consumed; the per-store range
/// descriptors are opaque.
#[derive(Debug, Deserialize)]
pub struct EvictionPayload {
    #[serde(rename = "store-id-ranges")]
    pub store_id_ranges: HashMap<String, serde_json::Value>,
}

/// How the active eviction schedulers encode their target stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// A single shared scheduler; targets live in the config payload.
    SharedPayload,
    /// One scheduler per store; the id is the trailing name token.
    PerStoreName,
}

impl RosterFormat {
    /// Detect the wire format from the shape of the scheduler-name list.
    pub fn detect(names: &[String]) -> Self {
        if names.len() == 1 && names[0] == EVICT_LEADER_SCHEDULER {
            RosterFormat::SharedPayload
        } else {
            RosterFormat::PerStoreName
        }
    }
}

/// Resolve the authoritative set of store ids currently under leader
/// eviction, given the active eviction-scheduler names.
pub async fn resolve(
    names: &[String],
    placement: &impl PlacementApi,
) -> GateResult<HashSet<String>> {
    match RosterFormat::detect(names) {
        RosterFormat::SharedPayload => resolve_shared_payload(placement).await,
        RosterFormat::PerStoreName => names
            .iter()
            .map(|name| store_id_from_scheduler_name(name))
            .collect(),
    }
}

/// Look the shared scheduler up in the configuration payload map.
///
/// An absent schedule section, payload map, or payload entry means no
/// evictions; a payload entry that fails to decode is a hard error.
async fn resolve_shared_payload(placement: &impl PlacementApi) -> GateResult<HashSet<String>> {
    let config = placement.get_config().await?;
    let raw = config
        .schedule
        .and_then(|schedule| schedule.schedulers_payload)
        .and_then(|mut payloads| payloads.remove(EVICT_LEADER_SCHEDULER));

    let Some(raw) = raw else {
        return Ok(HashSet::new());
    };

    let payload: EvictionPayload =
        serde_json::from_str(&raw).map_err(|source| GateError::Payload {
            scheduler: EVICT_LEADER_SCHEDULER.to_string(),
            source,
        })?;
    Ok(payload.store_id_ranges.into_keys().collect())
}

/// Extract the store id encoded in a per-store eviction scheduler name.
///
/// Names have the form `evict-leader-scheduler-<id>`; newer versions may
/// insert extra tokens before the id. Requires at least four `-`-delimited
/// tokens and a numeric trailing token — anything else is a hard error, not a
/// silently dropped eviction.
pub fn store_id_from_scheduler_name(name: &str) -> GateResult<String> {
    let tokens: Vec<&str> = name.split('-').collect();
    if tokens.len() < 4 {
        return Err(GateError::MalformedSchedulerName(name.to_string()));
    }
    let id = tokens[tokens.len() - 1];
    if id.parse::<u64>().is_err() {
        return Err(GateError::MalformedSchedulerName(name.to_string()));
    }
    Ok(id.to_string())
}
