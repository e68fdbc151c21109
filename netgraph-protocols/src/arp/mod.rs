//! Address Resolution Protocol (ARP)
//!
//! ARP frames are an auxiliary signal: each one becomes a neighbor sighting
//! keyed by interface and source MAC, never an edge.

pub mod handler;
pub mod packet;

pub use handler::ArpHandler;
pub use packet::{ArpOpcode, ArpPacket};
