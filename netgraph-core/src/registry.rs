//! Concurrent stores for discovered edges and neighbor sightings
//!
//! Both registries are created by the capture supervisor and shared with the
//! per-interface workers through `Arc`. Writers never block each other for
//! longer than a single push or insert.

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::neighbor::NeighborInfo;
use crate::topology::Edge;

/// Append-only list of discovered edges
///
/// Repeated sightings of the same adjacency are kept as separate entries.
#[derive(Debug, Default)]
pub struct EdgeRegistry {
    edges: Mutex<Vec<Edge>>,
}

impl EdgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge
    pub fn push(&self, edge: Edge) {
        self.edges.lock().push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.lock().is_empty()
    }

    /// Copy of the edges in arrival order
    pub fn snapshot(&self) -> Vec<Edge> {
        self.edges.lock().clone()
    }
}

/// Neighbor sightings keyed by `<interface>-<protocol>-<sourceMAC>`
///
/// A new sighting for an existing key replaces the previous one.
#[derive(Debug, Default)]
pub struct NeighborRegistry {
    entries: DashMap<String, NeighborInfo>,
}

impl NeighborRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sighting, returning the one it replaced
    pub fn record(&self, info: NeighborInfo) -> Option<NeighborInfo> {
        self.entries.insert(info.key(), info)
    }

    pub fn get(&self, key: &str) -> Option<NeighborInfo> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All sightings sorted by key
    pub fn snapshot(&self) -> Vec<(String, NeighborInfo)> {
        let mut entries: Vec<(String, NeighborInfo)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbor::NeighborProtocol;
    use crate::topology::Node;
    use std::sync::Arc;
    use std::thread;

    fn edge(interface: &str, n: usize) -> Edge {
        Edge::new(
            Node::new("host1", interface),
            Node::new(format!("sw{}", n), "Gi0/1"),
        )
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        const WORKERS: usize = 8;
        const PER_WORKER: usize = 500;

        let registry = Arc::new(EdgeRegistry::new());
        let handles: Vec<_> = (0..WORKERS)
            .map(|w| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for n in 0..PER_WORKER {
                        registry.push(edge(&format!("eth{}", w), n));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), WORKERS * PER_WORKER);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let registry = EdgeRegistry::new();
        registry.push(edge("eth0", 1));
        registry.push(edge("eth0", 1));

        let edges = registry.snapshot();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], edges[1]);
    }

    #[test]
    fn test_neighbor_overwrite_on_collision() {
        let registry = NeighborRegistry::new();
        let first = NeighborInfo::new(
            "eth0",
            "00:11:22:33:44:55",
            NeighborProtocol::Arp,
            "first",
        );
        let second = NeighborInfo::new(
            "eth0",
            "00:11:22:33:44:55",
            NeighborProtocol::Arp,
            "second",
        );

        assert!(registry.record(first).is_none());
        let replaced = registry.record(second).unwrap();
        assert_eq!(replaced.details, "first");

        assert_eq!(registry.len(), 1);
        let current = registry.get("eth0-ARP-00:11:22:33:44:55").unwrap();
        assert_eq!(current.details, "second");
    }

    #[test]
    fn test_neighbor_protocols_do_not_collide() {
        let registry = NeighborRegistry::new();
        registry.record(NeighborInfo::new("eth0", "aa:aa:aa:aa:aa:aa", NeighborProtocol::Arp, ""));
        registry.record(NeighborInfo::new("eth0", "aa:aa:aa:aa:aa:aa", NeighborProtocol::Cdp, ""));
        registry.record(NeighborInfo::new("eth1", "aa:aa:aa:aa:aa:aa", NeighborProtocol::Arp, ""));

        let keys: Vec<String> = registry.snapshot().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "eth0-ARP-aa:aa:aa:aa:aa:aa",
                "eth0-CDP-aa:aa:aa:aa:aa:aa",
                "eth1-ARP-aa:aa:aa:aa:aa:aa",
            ]
        );
    }
}
