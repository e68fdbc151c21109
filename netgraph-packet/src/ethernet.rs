//! Ethernet frame construction and parsing
//!
//! Handles Ethernet II frames (type field >= 0x0600) and IEEE 802.3 frames
//! whose type/length field carries a payload length instead.

use bytes::{BufMut, BytesMut};
use netgraph_core::{types::ethertypes, MacAddr};
use std::fmt;

/// EtherType values the discovery pipeline distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// IPv4 (0x0800)
    IPv4,
    /// ARP (0x0806)
    ARP,
    /// VLAN-tagged frame (0x8100)
    VLAN,
    /// IPv6 (0x86DD)
    IPv6,
    /// LLDP (0x88CC)
    LLDP,
    /// CDP carried directly in an Ethernet II frame (0x2000)
    CDP,
    /// 802.3 frame: the field holds the payload length (LLC follows)
    LLC,
    /// Any other EtherType
    Custom(u16),
}

impl EtherType {
    /// Convert EtherType to u16 value
    pub fn to_u16(self) -> u16 {
        match self {
            EtherType::IPv4 => 0x0800,
            EtherType::ARP => ethertypes::ARP,
            EtherType::VLAN => 0x8100,
            EtherType::IPv6 => 0x86DD,
            EtherType::LLDP => ethertypes::LLDP,
            EtherType::CDP => ethertypes::CDP,
            EtherType::LLC => 0, // Will be replaced with length
            EtherType::Custom(val) => val,
        }
    }

    /// Create EtherType from a type field known to be >= 0x0600
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0800 => EtherType::IPv4,
            ethertypes::ARP => EtherType::ARP,
            0x8100 => EtherType::VLAN,
            0x86DD => EtherType::IPv6,
            ethertypes::LLDP => EtherType::LLDP,
            ethertypes::CDP => EtherType::CDP,
            val => EtherType::Custom(val),
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::IPv4 => write!(f, "IPv4"),
            EtherType::ARP => write!(f, "ARP"),
            EtherType::VLAN => write!(f, "VLAN"),
            EtherType::IPv6 => write!(f, "IPv6"),
            EtherType::LLDP => write!(f, "LLDP"),
            EtherType::CDP => write!(f, "CDP"),
            EtherType::LLC => write!(f, "LLC"),
            EtherType::Custom(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// Ethernet frame
#[derive(Debug, Clone)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// EtherType or length field
    pub ethertype: EtherType,
    /// Payload data
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Minimum Ethernet frame size (without FCS)
    pub const MIN_FRAME_SIZE: usize = 60;

    /// Maximum Ethernet frame size (without FCS)
    pub const MAX_FRAME_SIZE: usize = 1514;

    /// Ethernet header size (dst + src + type/length)
    pub const HEADER_SIZE: usize = 14;

    /// Largest value of the type/length field that denotes a length
    pub const MAX_LENGTH_FIELD: u16 = 1500;

    /// Create a new Ethernet frame
    pub fn new(
        destination: MacAddr,
        source: MacAddr,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        }
    }

    /// Convert the frame to bytes
    ///
    /// Pads to the minimum frame size and writes the payload length for LLC frames.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());

        buffer.put_slice(self.destination.as_bytes());
        buffer.put_slice(self.source.as_bytes());

        if self.ethertype == EtherType::LLC {
            buffer.put_u16(self.payload.len() as u16);
        } else {
            buffer.put_u16(self.ethertype.to_u16());
        }

        buffer.put_slice(&self.payload);

        let mut result = buffer.to_vec();
        if result.len() < Self::MIN_FRAME_SIZE {
            result.resize(Self::MIN_FRAME_SIZE, 0);
        }

        result
    }

    /// Parse an Ethernet frame from bytes
    ///
    /// For 802.3 frames the payload is cut to the declared length (padding
    /// dropped); a length larger than the captured data keeps what is there.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::HEADER_SIZE {
            return None;
        }

        let destination = MacAddr::from_slice(&data[0..6])?;
        let source = MacAddr::from_slice(&data[6..12])?;

        let ethertype_or_length = u16::from_be_bytes([data[12], data[13]]);
        let body = &data[Self::HEADER_SIZE..];

        let (ethertype, payload) = if ethertype_or_length <= Self::MAX_LENGTH_FIELD {
            let len = (ethertype_or_length as usize).min(body.len());
            (EtherType::LLC, &body[..len])
        } else {
            (EtherType::from_u16(ethertype_or_length), body)
        };

        Some(EthernetFrame {
            destination,
            source,
            ethertype,
            payload: payload.to_vec(),
        })
    }
}
