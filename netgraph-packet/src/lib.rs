//! Link-layer frame parsing for netgraph
//!
//! Captured frames are decoded one layer at a time, each step returning a
//! typed result or `None`:
//!
//! - [`ethernet`] - Ethernet II and 802.3 length-framed headers
//! - [`llc`] - LLC/SNAP headers carried by 802.3 frames (CDP uses these)
//!
//! Both modules can also serialize their frames, which is how test fixtures
//! and replay tools produce byte-exact input.
//!
//! ```rust
//! use netgraph_core::MacAddr;
//! use netgraph_packet::ethernet::{EtherType, EthernetFrame};
//!
//! let frame = EthernetFrame::new(
//!     MacAddr::new([0x01, 0x80, 0xC2, 0x00, 0x00, 0x0E]),
//!     MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
//!     EtherType::LLDP,
//!     vec![0x00, 0x00],
//! );
//! let parsed = EthernetFrame::from_bytes(&frame.to_bytes()).unwrap();
//! assert_eq!(parsed.ethertype, EtherType::LLDP);
//! ```

pub mod ethernet;
pub mod llc;

pub use ethernet::{EtherType, EthernetFrame};
pub use llc::{LlcHeader, LlcSnapFrame, Oui, SnapHeader, SnapProtocolId};
