//! Cisco Discovery Protocol (CDP)
//!
//! CDP arrives either as an Ethernet II frame with type 0x2000 or, as Cisco
//! devices actually send it, in an 802.3 frame to 01:00:0C:CC:CC:CC with an
//! LLC/SNAP header (OUI 00:00:0C, protocol id 0x2000). Both forms are
//! recorded as neighbor sightings only.

pub mod handler;
pub mod packet;

pub use handler::CdpHandler;
pub use packet::{CdpPacket, CdpTlv, CDP_MULTICAST_MAC};
