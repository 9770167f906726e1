//! storegate-gate — the admission decision core.
//!
//! Before the orchestration platform (re)creates a storage-member pod, it
//! asks this gate for permission. The gate checks whether the store that ran
//! under that pod's identity is currently the target of an in-progress leader
//! eviction and, if so, ends the eviction so the recreated store can resume
//! normal duty.
//!
//! # Architecture
//!
//! ```text
//! gatekeeper::decide
//!   ├── PlacementApi::get_stores / get_evict_leader_schedulers
//!   ├── eviction::resolve        → set of store ids under eviction
//!   ├── correlate::match_store   → store whose address names this pod
//!   └── PlacementApi::end_evict_leader (at most once per decision)
//! ```
//!
//! Every decision reads a fresh snapshot from the placement service; the gate
//! holds no state of its own. Any failure other than the benign "cluster not
//! bootstrapped" signal denies the creation (fail closed).

pub mod correlate;
pub mod error;
pub mod eviction;
pub mod gatekeeper;

#[cfg(test)]
mod test_support;

pub use correlate::{match_store, pod_name_from_address};
pub use error::{GateError, GateResult};
pub use eviction::RosterFormat;
pub use gatekeeper::{AdmissionVerdict, PodRef, decide};
