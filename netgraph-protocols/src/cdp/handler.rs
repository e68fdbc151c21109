//! CDP handler: records a neighbor sighting per sender
//!
//! CDP does not contribute edges; the sighting carries the payload size and,
//! when the PDU decodes, the advertised device and port.

use std::sync::Arc;

use netgraph_core::{MacAddr, NeighborInfo, NeighborProtocol, NeighborRegistry, Result};
use tracing::debug;

use super::packet::CdpPacket;
use crate::classifier::DiscoveryProtocol;
use crate::context::LinkContext;
use crate::DiscoveryHandler;

#[derive(Debug, Clone)]
pub struct CdpHandler {
    neighbors: Arc<NeighborRegistry>,
}

impl CdpHandler {
    pub fn new(neighbors: Arc<NeighborRegistry>) -> Self {
        Self { neighbors }
    }
}

/// Detail line stored with a CDP sighting
pub fn describe(payload: &[u8]) -> String {
    let mut details = format!("CDP payload length: {} bytes", payload.len());

    if let Ok(packet) = CdpPacket::parse(payload) {
        if let Some(device) = packet.device_id() {
            details.push_str(&format!(", DeviceID={}", device));
        }
        if let Some(port) = packet.port_id() {
            details.push_str(&format!(", PortID={}", port));
        }
    }

    details
}

impl DiscoveryHandler for CdpHandler {
    fn protocol(&self) -> DiscoveryProtocol {
        DiscoveryProtocol::Cdp
    }

    fn handle(&self, ctx: &LinkContext, source: MacAddr, payload: &[u8]) -> Result<()> {
        let details = describe(payload);
        debug!("CDP from {} on {}: {}", source, ctx.interface, details);

        self.neighbors.record(NeighborInfo::new(
            &ctx.interface,
            source.to_string(),
            NeighborProtocol::Cdp,
            details,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdp::packet::CdpTlv;

    const SENDER: MacAddr = MacAddr::new([0x00, 0x1e, 0xf7, 0x00, 0x00, 0x01]);

    #[test]
    fn test_opaque_payload_reports_length_only() {
        assert_eq!(describe(&[0xFF; 10]), "CDP payload length: 10 bytes");
        assert_eq!(describe(&[]), "CDP payload length: 0 bytes");
    }

    #[test]
    fn test_decoded_payload_adds_identity() {
        let payload = CdpPacket::new()
            .add_tlv(CdpTlv::device_id("sw1"))
            .add_tlv(CdpTlv::port_id("Gi0/3"))
            .build();
        assert_eq!(
            describe(&payload),
            format!(
                "CDP payload length: {} bytes, DeviceID=sw1, PortID=Gi0/3",
                payload.len()
            )
        );
    }

    #[test]
    fn test_last_sighting_wins() {
        let neighbors = Arc::new(NeighborRegistry::new());
        let handler = CdpHandler::new(Arc::clone(&neighbors));
        let ctx = LinkContext::new("host1", "eth1", None);

        handler.handle(&ctx, SENDER, &[0u8; 4]).unwrap();
        handler.handle(&ctx, SENDER, &[0u8; 8]).unwrap();

        assert_eq!(neighbors.len(), 1);
        let info = neighbors.get("eth1-CDP-00:1e:f7:00:00:01").unwrap();
        assert_eq!(info.protocol, NeighborProtocol::Cdp);
        assert!(info.details.starts_with("CDP payload length: 8 bytes"));
    }
}
