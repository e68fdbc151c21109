//! Frame classification and handler dispatch
//!
//! Every captured frame goes through [`FrameProcessor::process`]: parse the
//! link layer, classify it into one of the three discovery protocols, and hand
//! the protocol payload to the matching handler. Unknown traffic is dropped.

use std::fmt;
use std::sync::Arc;

use netgraph_core::{EdgeRegistry, NeighborRegistry};
use netgraph_packet::{EtherType, EthernetFrame, LlcHeader, LlcSnapFrame, SnapHeader};
use tracing::{debug, trace};

use crate::arp::ArpHandler;
use crate::cdp::CdpHandler;
use crate::context::LinkContext;
use crate::lldp::LldpHandler;
use crate::DiscoveryHandler;

/// Protocols netgraph listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryProtocol {
    Lldp,
    Cdp,
    Arp,
}

impl DiscoveryProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryProtocol::Lldp => "LLDP",
            DiscoveryProtocol::Cdp => "CDP",
            DiscoveryProtocol::Arp => "ARP",
        }
    }
}

impl fmt::Display for DiscoveryProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a parsed frame to its discovery protocol and the payload that protocol owns
///
/// CDP is accepted both as EtherType 0x2000 and as an 802.3 frame with a Cisco
/// LLC/SNAP header; in the latter case the returned payload starts after SNAP.
pub fn classify(frame: &EthernetFrame) -> Option<(DiscoveryProtocol, &[u8])> {
    match frame.ethertype {
        EtherType::LLDP => Some((DiscoveryProtocol::Lldp, frame.payload.as_slice())),
        EtherType::CDP => Some((DiscoveryProtocol::Cdp, frame.payload.as_slice())),
        EtherType::ARP => Some((DiscoveryProtocol::Arp, frame.payload.as_slice())),
        EtherType::LLC => {
            let llc = LlcHeader::from_bytes(&frame.payload)?;
            if !llc.is_snap() {
                return None;
            }
            let snap = SnapHeader::from_bytes(&frame.payload[LlcHeader::SIZE..])?;
            if snap != SnapHeader::cdp() {
                return None;
            }
            Some((
                DiscoveryProtocol::Cdp,
                &frame.payload[LlcSnapFrame::HEADER_SIZE..],
            ))
        }
        _ => None,
    }
}

/// What happened to one captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Handled and written to a registry
    Recorded(DiscoveryProtocol),
    /// Not a discovery protocol
    Ignored,
    /// Too short to parse, or rejected by the protocol handler
    Malformed,
}

/// Per-interface frame pipeline: classifier plus the three handlers
pub struct FrameProcessor {
    ctx: LinkContext,
    lldp: LldpHandler,
    cdp: CdpHandler,
    arp: ArpHandler,
}

impl FrameProcessor {
    pub fn new(
        ctx: LinkContext,
        edges: Arc<EdgeRegistry>,
        neighbors: Arc<NeighborRegistry>,
    ) -> Self {
        Self {
            ctx,
            lldp: LldpHandler::new(edges),
            cdp: CdpHandler::new(Arc::clone(&neighbors)),
            arp: ArpHandler::new(neighbors),
        }
    }

    /// Classify and handle one raw link-layer frame
    pub fn process(&self, data: &[u8]) -> FrameOutcome {
        let Some(frame) = EthernetFrame::from_bytes(data) else {
            trace!("Short frame ({} bytes) on {}", data.len(), self.ctx.interface);
            return FrameOutcome::Malformed;
        };

        let Some((protocol, payload)) = classify(&frame) else {
            return FrameOutcome::Ignored;
        };

        let handler: &dyn DiscoveryHandler = match protocol {
            DiscoveryProtocol::Lldp => &self.lldp,
            DiscoveryProtocol::Cdp => &self.cdp,
            DiscoveryProtocol::Arp => &self.arp,
        };

        match handler.handle(&self.ctx, frame.source, payload) {
            Ok(()) => FrameOutcome::Recorded(handler.protocol()),
            Err(e) => {
                debug!(
                    "Dropping {} frame from {} on {}: {}",
                    handler.protocol(),
                    frame.source,
                    self.ctx.interface,
                    e
                );
                FrameOutcome::Malformed
            }
        }
    }
}
