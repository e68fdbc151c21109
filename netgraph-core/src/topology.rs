//! Adjacency model: nodes and the edges between them
//!
//! The serialized form of [`Edge`] is the file format consumed by the
//! downstream graph renderers, so field names and the omission of an
//! empty `mac` must stay stable.

use serde::{Deserialize, Serialize};

use crate::types::MacAddr;

/// One endpoint of a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub device: String,
    pub interface: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac: String,
}

impl Node {
    pub fn new(device: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            interface: interface.into(),
            mac: String::new(),
        }
    }

    /// Attach a hardware address; an all-zero address is treated as absent.
    pub fn with_mac(mut self, mac: Option<MacAddr>) -> Self {
        self.mac = match mac {
            Some(mac) if !mac.is_zero() => mac.to_string(),
            _ => String::new(),
        };
        self
    }
}

/// A directed local -> remote adjacency observed through LLDP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub local: Node,
    pub remote: Node,
}

impl Edge {
    pub fn new(local: Node, remote: Node) -> Self {
        Self { local, remote }
    }

    /// Whether both ends name the same device
    pub fn is_self_loop(&self) -> bool {
        self.local.device == self.remote.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<Edge> {
        vec![
            Edge::new(
                Node::new("host1", "eth0").with_mac(Some(MacAddr::new([0x02, 0, 0, 0, 0, 1]))),
                Node::new("core1", "Gi0/1").with_mac(Some(MacAddr::new([0x00, 0x1b, 0, 0, 0, 2]))),
            ),
            Edge::new(Node::new("host1", "eth1"), Node::new("UnknownRemote", "")),
        ]
    }

    #[test]
    fn test_empty_mac_is_omitted() {
        let json = serde_json::to_string(&Node::new("host1", "eth1")).unwrap();
        assert_eq!(json, r#"{"device":"host1","interface":"eth1"}"#);
    }

    #[test]
    fn test_zero_mac_is_treated_as_absent() {
        let node = Node::new("host1", "lo").with_mac(Some(MacAddr::zero()));
        assert!(node.mac.is_empty());
    }

    #[test]
    fn test_edge_wire_shape() {
        let value = serde_json::to_value(&sample_edges()[0]).unwrap();
        assert_eq!(value["local"]["device"], "host1");
        assert_eq!(value["local"]["mac"], "02:00:00:00:00:01");
        assert_eq!(value["remote"]["interface"], "Gi0/1");
        assert_eq!(value["remote"]["mac"], "00:1b:00:00:00:02");
    }

    #[test]
    fn test_json_round_trip_preserves_omission() {
        let edges = sample_edges();
        let json = serde_json::to_string_pretty(&edges).unwrap();
        assert!(!json.contains(r#""mac": """#));

        let parsed: Vec<Edge> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, edges);
        assert!(parsed[1].local.mac.is_empty());
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new(Node::new("sw1", "eth0"), Node::new("sw1", "Gi0/2"));
        assert!(edge.is_self_loop());
        assert!(!sample_edges()[0].is_self_loop());
    }
}
