//! Store-to-pod correlation.
//!
//! A store registers its network address (`host:port`) with the placement
//! service; under the orchestration platform the first dot-delimited label of
//! the host is the name of the pod the store runs in. Correlation recovers
//! that pod name from the address and matches it against the requesting pod.

use storegate_placement::StoreInfo;

/// Extract the workload identity encoded in a store's network address.
///
/// `tikv-1.tikv-peer.ns:20160` → `tikv-1`. Returns `None` when the address
/// yields no usable label; such a store never correlates with any pod.
pub fn pod_name_from_address(address: &str) -> Option<&str> {
    let host = address.split(':').next().unwrap_or("");
    let label = host.split('.').next().unwrap_or("");
    if label.is_empty() { None } else { Some(label) }
}

/// Find the store whose address correlates to `pod_name`.
///
/// Returns the first match in snapshot order; the platform's address
/// allocation guarantees at most one.
pub fn match_store<'a>(stores: &'a [StoreInfo], pod_name: &str) -> Option<&'a StoreInfo> {
    stores
        .iter()
        .find(|info| pod_name_from_address(&info.store.address) == Some(pod_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store;

    #[test]
    fn first_label_of_host_is_the_pod_name() {
        assert_eq!(
            pod_name_from_address("tikv-pd-1.svc.cluster:20160"),
            Some("tikv-pd-1")
        );
    }

    #[test]
    fn address_without_port_still_correlates() {
        assert_eq!(pod_name_from_address("tikv-0.peer.ns"), Some("tikv-0"));
    }

    #[test]
    fn bare_host_is_its_own_label() {
        assert_eq!(pod_name_from_address("tikv-0:20160"), Some("tikv-0"));
    }

    #[test]
    fn unparsable_addresses_never_correlate() {
        assert_eq!(pod_name_from_address(""), None);
        assert_eq!(pod_name_from_address(":20160"), None);
        assert_eq!(pod_name_from_address(".svc.cluster:20160"), None);
    }

    #[test]
    fn matches_the_store_for_a_pod() {
        let stores = vec![
            store(1, "tikv-0.tikv-peer.ns:20160"),
            store(2, "tikv-1.tikv-peer.ns:20160"),
        ];
        let found = match_store(&stores, "tikv-1").unwrap();
        assert_eq!(found.store.id, 2);
    }

    #[test]
    fn no_match_for_unknown_pod() {
        let stores = vec![store(1, "tikv-0.tikv-peer.ns:20160")];
        assert!(match_store(&stores, "tikv-9").is_none());
    }

    #[test]
    fn first_match_wins_in_snapshot_order() {
        let stores = vec![
            store(1, "tikv-0.peer-a.ns:20160"),
            store(2, "tikv-0.peer-b.ns:20160"),
        ];
        assert_eq!(match_store(&stores, "tikv-0").unwrap().store.id, 1);
    }
}
