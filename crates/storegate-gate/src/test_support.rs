//! Shared test fixtures: a scripted in-memory stand-in for the placement
//! service.

use std::collections::HashMap;
use std::sync::Mutex;

use storegate_placement::{
    EVICT_LEADER_SCHEDULER, NOT_BOOTSTRAPPED_FRAGMENT, PlacementApi, PlacementConfig,
    PlacementError, PlacementResult, ScheduleConfig, Store, StoreInfo, StoresInfo,
};

/// Scripted response for one stub endpoint.
pub enum Scripted<T> {
    Ok(T),
    NotBootstrapped,
    Fail(&'static str),
}

impl<T: Clone> Scripted<T> {
    fn resolve(&self, url: &str) -> PlacementResult<T> {
        match self {
            Scripted::Ok(value) => Ok(value.clone()),
            Scripted::NotBootstrapped => Err(PlacementError::Api {
                url: url.to_string(),
                status: 500,
                message: format!("{NOT_BOOTSTRAPPED_FRAGMENT}\"\n"),
            }),
            Scripted::Fail(message) => Err(PlacementError::Api {
                url: url.to_string(),
                status: 500,
                message: (*message).to_string(),
            }),
        }
    }
}

/// Stub placement service recording eviction terminations.
pub struct StubPlacement {
    pub stores: Scripted<StoresInfo>,
    pub schedulers: Scripted<Vec<String>>,
    pub config: Scripted<PlacementConfig>,
    /// When set, termination calls fail with this message.
    pub end_fails: Option<&'static str>,
    /// Store ids whose eviction was ended, in call order.
    pub ended: Mutex<Vec<u64>>,
}

impl Default for StubPlacement {
    fn default() -> Self {
        Self {
            stores: Scripted::Ok(stores_info(vec![])),
            schedulers: Scripted::Ok(vec![]),
            config: Scripted::Ok(PlacementConfig::default()),
            end_fails: None,
            ended: Mutex::new(vec![]),
        }
    }
}

impl PlacementApi for StubPlacement {
    async fn get_stores(&self) -> PlacementResult<StoresInfo> {
        self.stores.resolve("stub://stores")
    }

    async fn get_evict_leader_schedulers(&self) -> PlacementResult<Vec<String>> {
        self.schedulers.resolve("stub://schedulers")
    }

    async fn get_config(&self) -> PlacementResult<PlacementConfig> {
        self.config.resolve("stub://config")
    }

    async fn end_evict_leader(&self, store_id: u64) -> PlacementResult<()> {
        if let Some(message) = self.end_fails {
            return Err(PlacementError::Api {
                url: "stub://end-evict-leader".to_string(),
                status: 500,
                message: message.to_string(),
            });
        }
        self.ended.lock().unwrap().push(store_id);
        Ok(())
    }
}

/// A store entry with the given id and address.
pub fn store(id: u64, address: &str) -> StoreInfo {
    StoreInfo {
        store: Store {
            id,
            address: address.to_string(),
            state_name: "Up".to_string(),
        },
        status: None,
    }
}

/// A stores snapshot whose count matches the entry list.
pub fn stores_info(stores: Vec<StoreInfo>) -> StoresInfo {
    StoresInfo {
        count: stores.len() as i64,
        stores,
    }
}

/// A config document carrying `raw` as the shared eviction scheduler's
/// payload entry.
pub fn payload_config(raw: &str) -> PlacementConfig {
    let mut payloads = HashMap::new();
    payloads.insert(EVICT_LEADER_SCHEDULER.to_string(), raw.to_string());
    PlacementConfig {
        schedule: Some(ScheduleConfig {
            schedulers_payload: Some(payloads),
        }),
    }
}
