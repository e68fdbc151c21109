//! ARP handler: records which hardware/protocol addresses talk on a segment

use std::sync::Arc;

use netgraph_core::{MacAddr, NeighborInfo, NeighborProtocol, NeighborRegistry, Result};
use tracing::debug;

use super::packet::ArpPacket;
use crate::classifier::DiscoveryProtocol;
use crate::context::LinkContext;
use crate::DiscoveryHandler;

#[derive(Debug, Clone)]
pub struct ArpHandler {
    neighbors: Arc<NeighborRegistry>,
}

impl ArpHandler {
    pub fn new(neighbors: Arc<NeighborRegistry>) -> Self {
        Self { neighbors }
    }
}

/// Detail line stored with an ARP sighting
pub fn describe(packet: &ArpPacket) -> String {
    format!(
        "ARP: SenderIP={}, SenderMAC={}, TargetIP={}, TargetMAC={}",
        packet.sender_proto_addr,
        packet.sender_hw_addr,
        packet.target_proto_addr,
        packet.target_hw_addr
    )
}

impl DiscoveryHandler for ArpHandler {
    fn protocol(&self) -> DiscoveryProtocol {
        DiscoveryProtocol::Arp
    }

    fn handle(&self, ctx: &LinkContext, source: MacAddr, payload: &[u8]) -> Result<()> {
        let packet = ArpPacket::parse(payload)?;
        let details = describe(&packet);
        debug!("{} on {}", details, ctx.interface);

        self.neighbors.record(NeighborInfo::new(
            &ctx.interface,
            source.to_string(),
            NeighborProtocol::Arp,
            details,
        ));
        Ok(())
    }
}
