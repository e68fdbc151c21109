//! Discovery protocol decoding for netgraph
//!
//! Three protocols feed the topology:
//!
//! ### LLDP
//! Each LLDPDU yields one edge from the receiving interface to the announcing
//! device and port. See [`lldp`].
//!
//! ### CDP
//! Recorded as a neighbor sighting only. See [`cdp`].
//!
//! ### ARP
//! Recorded as a neighbor sighting only. See [`arp`].
//!
//! [`classifier::FrameProcessor`] ties them together for one interface.

pub mod arp;
pub mod cdp;
pub mod classifier;
pub mod context;
pub mod lldp;

use netgraph_core::{MacAddr, Result};

pub use arp::ArpHandler;
pub use cdp::CdpHandler;
pub use classifier::{classify, DiscoveryProtocol, FrameOutcome, FrameProcessor};
pub use context::LinkContext;
pub use lldp::{decode_lldp_fields, LldpFields, LldpHandler};

/// A handler for the payload of one discovery protocol
pub trait DiscoveryHandler: Send + Sync {
    /// Protocol this handler accepts
    fn protocol(&self) -> DiscoveryProtocol;

    /// Process the protocol payload of a frame received on `ctx.interface`
    ///
    /// `source` is the frame's source MAC. An error means the payload was
    /// rejected and nothing was recorded.
    fn handle(&self, ctx: &LinkContext, source: MacAddr, payload: &[u8]) -> Result<()>;
}
