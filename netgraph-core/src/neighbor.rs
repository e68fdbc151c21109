//! Auxiliary neighbor sightings (ARP and CDP)

use std::fmt;

/// Protocol a neighbor sighting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborProtocol {
    Arp,
    Cdp,
}

impl NeighborProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeighborProtocol::Arp => "ARP",
            NeighborProtocol::Cdp => "CDP",
        }
    }
}

impl fmt::Display for NeighborProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic sighting of a neighbor; not part of the edge graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborInfo {
    pub interface_name: String,
    pub source_mac: String,
    pub protocol: NeighborProtocol,
    pub details: String,
}

impl NeighborInfo {
    pub fn new(
        interface_name: impl Into<String>,
        source_mac: impl Into<String>,
        protocol: NeighborProtocol,
        details: impl Into<String>,
    ) -> Self {
        Self {
            interface_name: interface_name.into(),
            source_mac: source_mac.into(),
            protocol,
            details: details.into(),
        }
    }

    /// Registry key: `<interface>-<protocol>-<sourceMAC>`
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.interface_name, self.protocol, self.source_mac
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let info = NeighborInfo::new(
            "eth0",
            "00:11:22:33:44:55",
            NeighborProtocol::Cdp,
            "CDP payload length: 42 bytes",
        );
        assert_eq!(info.key(), "eth0-CDP-00:11:22:33:44:55");
    }

    #[test]
    fn test_protocol_display() {
        assert_eq!(NeighborProtocol::Arp.to_string(), "ARP");
        assert_eq!(NeighborProtocol::Cdp.to_string(), "CDP");
    }
}
