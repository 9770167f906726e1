//! Wire types for the placement service's REST payloads.
//!
//! Only the fields this gate consumes are modeled; unknown fields in the
//! service's responses are ignored on decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known name of the shared leader-eviction scheduler.
pub const EVICT_LEADER_SCHEDULER: &str = "evict-leader-scheduler";

/// Name of the per-store leader-eviction schedule for `store_id`.
pub fn evict_leader_scheduler_name(store_id: u64) -> String {
    format!("{EVICT_LEADER_SCHEDULER}-{store_id}")
}

/// Snapshot of all stores known to the placement service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoresInfo {
    pub count: i64,
    #[serde(default)]
    pub stores: Vec<StoreInfo>,
}

/// One store entry: registered metadata plus runtime status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreInfo {
    pub store: Store,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreStatus>,
}

/// Store metadata registered with the placement service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    /// Numeric identifier, stable for the store's lifetime.
    pub id: u64,
    /// Network address in `host:port` form.
    pub address: String,
    /// Operational state as reported by the service ("Up", "Offline", ...).
    #[serde(default)]
    pub state_name: String,
}

/// Runtime counters for one store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreStatus {
    #[serde(default)]
    pub leader_count: i64,
    #[serde(default)]
    pub region_count: i64,
}

/// The placement service's configuration document.
///
/// Only the scheduling section is consumed; it may be absent entirely on
/// older service versions, which is treated as empty rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlacementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

/// Scheduling sub-section of the configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    /// Per-scheduler opaque payloads, keyed by scheduler name.
    #[serde(
        rename = "schedulers-payload",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub schedulers_payload: Option<HashMap<String, String>>,
}
