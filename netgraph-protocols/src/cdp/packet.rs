//! CDP Packet Parser and Builder
//!
//! A CDP PDU is a 4-byte header (version, TTL, checksum) followed by TLVs with
//! a 2-byte type and a 2-byte length that includes the TLV header itself.

use bytes::{BufMut, BytesMut};
use netgraph_core::{Error, Result};

/// CDP Protocol version
pub const CDP_VERSION: u8 = 0x02;

/// Default TTL (Time To Live) in seconds
pub const CDP_TTL_DEFAULT: u8 = 180;

/// CDP multicast MAC address
pub const CDP_MULTICAST_MAC: [u8; 6] = [0x01, 0x00, 0x0C, 0xCC, 0xCC, 0xCC];

pub const CDP_TYPE_DEVID: u16 = 0x0001;
pub const CDP_TYPE_PORTID: u16 = 0x0003;
pub const CDP_TYPE_PLATFORM: u16 = 0x0006;

/// Size of the TLV type + length header
const TLV_HEADER_LEN: usize = 4;

/// Raw CDP TLV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdpTlv {
    pub tlv_type: u16,
    pub value: Vec<u8>,
}

impl CdpTlv {
    pub fn new(tlv_type: u16, value: Vec<u8>) -> Self {
        Self { tlv_type, value }
    }

    pub fn device_id(id: &str) -> Self {
        Self::new(CDP_TYPE_DEVID, id.as_bytes().to_vec())
    }

    pub fn port_id(port: &str) -> Self {
        Self::new(CDP_TYPE_PORTID, port.as_bytes().to_vec())
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

/// CDP packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdpPacket {
    pub version: u8,
    pub ttl: u8,
    pub checksum: u16,
    pub tlvs: Vec<CdpTlv>,
}

impl CdpPacket {
    pub fn new() -> Self {
        Self {
            version: CDP_VERSION,
            ttl: CDP_TTL_DEFAULT,
            checksum: 0,
            tlvs: Vec::new(),
        }
    }

    pub fn add_tlv(mut self, tlv: CdpTlv) -> Self {
        self.tlvs.push(tlv);
        self
    }

    /// Build the packet into bytes, filling in the checksum
    pub fn build(&self) -> Vec<u8> {
        let mut buffer = BytesMut::new();

        buffer.put_u8(self.version);
        buffer.put_u8(self.ttl);
        buffer.put_u16(0); // Placeholder for checksum

        for tlv in &self.tlvs {
            buffer.put_u16(tlv.tlv_type);
            buffer.put_u16((TLV_HEADER_LEN + tlv.value.len()) as u16);
            buffer.put_slice(&tlv.value);
        }

        let checksum = calculate_checksum(&buffer);
        buffer[2..4].copy_from_slice(&checksum.to_be_bytes());

        buffer.to_vec()
    }

    /// Parse a CDP packet from bytes
    ///
    /// The checksum is not verified. TLV parsing stops at the first TLV whose
    /// length is invalid or runs past the data; earlier TLVs are kept.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(Error::parsing("CDP packet too short"));
        }

        let version = data[0];
        if version != 1 && version != 2 {
            return Err(Error::parsing(format!("Unknown CDP version {}", version)));
        }
        let ttl = data[1];
        let checksum = u16::from_be_bytes([data[2], data[3]]);

        let mut offset = 4;
        let mut tlvs = Vec::new();

        while offset + TLV_HEADER_LEN <= data.len() {
            let tlv_type = u16::from_be_bytes([data[offset], data[offset + 1]]);
            let tlv_len = u16::from_be_bytes([data[offset + 2], data[offset + 3]]) as usize;

            if tlv_len < TLV_HEADER_LEN || offset + tlv_len > data.len() {
                break;
            }

            let value = data[offset + TLV_HEADER_LEN..offset + tlv_len].to_vec();
            tlvs.push(CdpTlv::new(tlv_type, value));
            offset += tlv_len;
        }

        Ok(CdpPacket {
            version,
            ttl,
            checksum,
            tlvs,
        })
    }

    fn find(&self, tlv_type: u16) -> Option<&CdpTlv> {
        self.tlvs.iter().find(|tlv| tlv.tlv_type == tlv_type)
    }

    /// Device ID (usually the hostname) of the sender
    pub fn device_id(&self) -> Option<String> {
        self.find(CDP_TYPE_DEVID).map(CdpTlv::text)
    }

    /// Port the sender transmitted the PDU from
    pub fn port_id(&self) -> Option<String> {
        self.find(CDP_TYPE_PORTID).map(CdpTlv::text)
    }
}

impl Default for CdpPacket {
    fn default() -> Self {
        Self::new()
    }
}

/// Internet-style one's complement checksum over the PDU
fn calculate_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    let mut i = 0;

    while i + 1 < data.len() {
        sum += u16::from_be_bytes([data[i], data[i + 1]]) as u32;
        i += 2;
    }

    // Odd trailing byte
    if i < data.len() {
        sum += (data[i] as u32) << 8;
    }

    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }

    !sum as u16
}
