//! LLC (Logical Link Control) and SNAP (SubNetwork Access Protocol)
//!
//! Cisco equipment sends CDP inside 802.3 frames with an LLC/SNAP header
//! (DSAP/SSAP 0xAA, control 0x03, OUI 00:00:0C, protocol id 0x2000).

use bytes::{BufMut, BytesMut};

/// OUI (Organizationally Unique Identifier) - 3 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// Cisco OUI (0x00000C)
    pub const CISCO: Oui = Oui([0x00, 0x00, 0x0C]);

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

/// SNAP Protocol ID (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapProtocolId(pub u16);

impl SnapProtocolId {
    /// CDP (0x2000)
    pub const CDP: SnapProtocolId = SnapProtocolId(0x2000);

    pub fn to_u16(self) -> u16 {
        self.0
    }
}

/// LLC header (3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlcHeader {
    /// Destination Service Access Point
    pub dsap: u8,
    /// Source Service Access Point
    pub ssap: u8,
    /// Control field
    pub control: u8,
}

impl LlcHeader {
    /// LLC header size in bytes
    pub const SIZE: usize = 3;

    /// SAP value announcing a SNAP header
    pub const SAP_SNAP: u8 = 0xAA;

    /// Unnumbered Information control value
    pub const CONTROL_UI: u8 = 0x03;

    /// Standard SNAP LLC header (DSAP=0xAA, SSAP=0xAA, Control=0x03)
    pub fn snap() -> Self {
        LlcHeader {
            dsap: Self::SAP_SNAP,
            ssap: Self::SAP_SNAP,
            control: Self::CONTROL_UI,
        }
    }

    /// Whether a SNAP header follows
    pub fn is_snap(&self) -> bool {
        *self == Self::snap()
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.dsap, self.ssap, self.control]
    }

    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }

        Some(LlcHeader {
            dsap: data[0],
            ssap: data[1],
            control: data[2],
        })
    }
}

/// SNAP header (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapHeader {
    /// Organizationally Unique Identifier (3 bytes)
    pub oui: Oui,
    /// Protocol ID (2 bytes)
    pub protocol_id: SnapProtocolId,
}

impl SnapHeader {
    /// SNAP header size in bytes
    pub const SIZE: usize = 5;

    /// CDP SNAP header (Cisco OUI + CDP protocol)
    pub fn cdp() -> Self {
        SnapHeader {
            oui: Oui::CISCO,
            protocol_id: SnapProtocolId::CDP,
        }
    }

    pub fn to_bytes(&self) -> [u8; 5] {
        let mut bytes = [0u8; 5];
        bytes[0..3].copy_from_slice(self.oui.as_bytes());
        bytes[3..5].copy_from_slice(&self.protocol_id.to_u16().to_be_bytes());
        bytes
    }

    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }

        Some(SnapHeader {
            oui: Oui([data[0], data[1], data[2]]),
            protocol_id: SnapProtocolId(u16::from_be_bytes([data[3], data[4]])),
        })
    }
}

/// LLC/SNAP encapsulated payload
#[derive(Debug, Clone)]
pub struct LlcSnapFrame {
    pub llc: LlcHeader,
    pub snap: SnapHeader,
    pub payload: Vec<u8>,
}

impl LlcSnapFrame {
    /// Total LLC/SNAP header size (LLC + SNAP)
    pub const HEADER_SIZE: usize = LlcHeader::SIZE + SnapHeader::SIZE;

    /// Create a CDP LLC/SNAP frame
    pub fn cdp(payload: Vec<u8>) -> Self {
        LlcSnapFrame {
            llc: LlcHeader::snap(),
            snap: SnapHeader::cdp(),
            payload,
        }
    }

    /// Whether this frame carries CDP
    pub fn is_cdp(&self) -> bool {
        self.llc.is_snap() && self.snap == SnapHeader::cdp()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());
        buffer.put_slice(&self.llc.to_bytes());
        buffer.put_slice(&self.snap.to_bytes());
        buffer.put_slice(&self.payload);
        buffer.to_vec()
    }

    /// Parse from the payload of an 802.3 frame
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::HEADER_SIZE {
            return None;
        }

        let llc = LlcHeader::from_bytes(&data[0..3])?;
        if !llc.is_snap() {
            return None;
        }
        let snap = SnapHeader::from_bytes(&data[3..8])?;

        Some(LlcSnapFrame {
            llc,
            snap,
            payload: data[Self::HEADER_SIZE..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdp_snap_bytes() {
        let frame = LlcSnapFrame::cdp(vec![0x02, 0xB4]);
        assert_eq!(
            frame.to_bytes(),
            vec![0xAA, 0xAA, 0x03, 0x00, 0x00, 0x0C, 0x20, 0x00, 0x02, 0xB4]
        );
    }

    #[test]
    fn test_parse_cdp() {
        let bytes = LlcSnapFrame::cdp(vec![0x02, 0xB4, 0x00, 0x00]).to_bytes();
        let frame = LlcSnapFrame::from_bytes(&bytes).unwrap();
        assert!(frame.is_cdp());
        assert_eq!(frame.payload, vec![0x02, 0xB4, 0x00, 0x00]);
    }

    #[test]
    fn test_non_snap_llc_is_rejected() {
        // STP BPDU: DSAP/SSAP 0x42
        let data = [0x42, 0x42, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(LlcSnapFrame::from_bytes(&data).is_none());
    }

    #[test]
    fn test_other_snap_protocol_is_not_cdp() {
        let frame = LlcSnapFrame {
            llc: LlcHeader::snap(),
            snap: SnapHeader {
                oui: Oui::CISCO,
                protocol_id: SnapProtocolId(0x2004), // DTP
            },
            payload: vec![],
        };
        let parsed = LlcSnapFrame::from_bytes(&frame.to_bytes()).unwrap();
        assert!(!parsed.is_cdp());
    }

    #[test]
    fn test_truncated() {
        assert!(LlcSnapFrame::from_bytes(&[0xAA, 0xAA, 0x03, 0x00]).is_none());
    }
}
