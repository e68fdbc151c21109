//! Link Layer Discovery Protocol (LLDP) - IEEE 802.1AB
//!
//! LLDP frames have the following structure:
//! - Destination MAC: 01:80:C2:00:00:0E (nearest bridge multicast)
//! - Ethertype: 0x88CC
//! - TLVs: 7-bit type, 9-bit length, value
//!
//! netgraph reads only three TLVs:
//! - Chassis ID (Type 1), subtype byte stripped
//! - Port ID (Type 2), subtype byte stripped
//! - System Name (Type 5)
//!
//! Everything else is skipped. Decoding stops at End of LLDPDU (Type 0) or at
//! the first TLV that does not fit in the frame.

pub mod handler;
pub mod packet;

pub use handler::{build_edge, LldpHandler};
pub use packet::{
    decode_lldp_fields, LldpFields, LldpPdu, LldpTlv, LldpTlvType, LLDP_MULTICAST_MAC,
    UNKNOWN_REMOTE,
};
