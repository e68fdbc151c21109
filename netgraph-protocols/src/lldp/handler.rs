//! LLDP handler: one adjacency edge per received LLDPDU

use std::sync::Arc;

use netgraph_core::{Edge, EdgeRegistry, MacAddr, Node, Result};
use tracing::debug;

use super::packet::{decode_lldp_fields, LldpFields};
use crate::classifier::DiscoveryProtocol;
use crate::context::LinkContext;
use crate::DiscoveryHandler;

/// Turns LLDPDUs into edges in the shared [`EdgeRegistry`]
#[derive(Debug, Clone)]
pub struct LldpHandler {
    edges: Arc<EdgeRegistry>,
}

impl LldpHandler {
    pub fn new(edges: Arc<EdgeRegistry>) -> Self {
        Self { edges }
    }
}

/// Build the local -> remote edge for decoded LLDP fields
pub fn build_edge(ctx: &LinkContext, source: MacAddr, fields: &LldpFields) -> Edge {
    let local = Node::new(&ctx.hostname, &ctx.interface).with_mac(ctx.interface_mac);
    let remote = Node::new(fields.remote_device_name(), &fields.port_id).with_mac(Some(source));
    Edge::new(local, remote)
}

impl DiscoveryHandler for LldpHandler {
    fn protocol(&self) -> DiscoveryProtocol {
        DiscoveryProtocol::Lldp
    }

    fn handle(&self, ctx: &LinkContext, source: MacAddr, payload: &[u8]) -> Result<()> {
        let fields = decode_lldp_fields(payload);
        let edge = build_edge(ctx, source, &fields);

        debug!(
            "LLDP on {}: {} port {} (chassis '{}')",
            ctx.interface, edge.remote.device, edge.remote.interface, fields.chassis_id
        );

        // Repeated announcements are kept as separate edges
        self.edges.push(edge);
        Ok(())
    }
}
