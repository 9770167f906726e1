//! storegate-placement — client for the storage cluster's placement service.
//!
//! The placement service is the cluster's control plane: it tracks store
//! topology and maintenance operations such as leader eviction. StoreGate is
//! a read/write client of it — four operations, consumed fresh per admission
//! decision with no caching.
//!
//! `PlacementApi` expresses the consumed capability set as a trait;
//! `PlacementClient` is the plain-HTTP implementation. `EndpointResolver`
//! maps an owning cluster reference to that cluster's placement URL.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

pub use client::{PlacementApi, PlacementClient};
pub use endpoints::{DEFAULT_ENDPOINT_TEMPLATE, EndpointResolver};
pub use error::{NOT_BOOTSTRAPPED_FRAGMENT, PlacementError, PlacementResult};
pub use types::*;
