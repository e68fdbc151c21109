//! LLDP TLV decoding and encoding

use bytes::{BufMut, BytesMut};

/// LLDP multicast MAC address (nearest bridge)
pub const LLDP_MULTICAST_MAC: [u8; 6] = [0x01, 0x80, 0xC2, 0x00, 0x00, 0x0E];

/// Remote device name used when a PDU carries neither system name nor chassis id
pub const UNKNOWN_REMOTE: &str = "UnknownRemote";

/// Largest value the 9-bit TLV length field can carry
pub const MAX_TLV_LENGTH: usize = 0x1FF;

/// LLDP TLV types the decoder acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LldpTlvType {
    EndOfLldpdu = 0,
    ChassisId = 1,
    PortId = 2,
    Ttl = 3,
    PortDescription = 4,
    SystemName = 5,
}

impl LldpTlvType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LldpTlvType::EndOfLldpdu),
            1 => Some(LldpTlvType::ChassisId),
            2 => Some(LldpTlvType::PortId),
            3 => Some(LldpTlvType::Ttl),
            4 => Some(LldpTlvType::PortDescription),
            5 => Some(LldpTlvType::SystemName),
            _ => None,
        }
    }
}

/// Chassis ID subtype for locally assigned identifiers
pub const CHASSIS_SUBTYPE_LOCAL: u8 = 7;

/// Port ID subtype for interface names
pub const PORT_SUBTYPE_INTERFACE_NAME: u8 = 5;

/// The fields netgraph extracts from an LLDPDU
///
/// A field that did not appear (or could not be read) is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LldpFields {
    pub chassis_id: String,
    pub port_id: String,
    pub system_name: String,
}

impl LldpFields {
    /// Name for the advertising device: system name, then chassis id, then
    /// [`UNKNOWN_REMOTE`]. Never empty.
    pub fn remote_device_name(&self) -> &str {
        if !self.system_name.is_empty() {
            &self.system_name
        } else if !self.chassis_id.is_empty() {
            &self.chassis_id
        } else {
            UNKNOWN_REMOTE
        }
    }
}

/// Decode chassis id, port id and system name from an LLDPDU
///
/// Decoding stops at End-of-LLDPDU, at a zero-length TLV, at a header that
/// does not fit, or at a TLV whose declared length runs past the buffer.
/// Whatever was gathered before the stop is returned; this never fails.
pub fn decode_lldp_fields(payload: &[u8]) -> LldpFields {
    let mut fields = LldpFields::default();
    let mut offset = 0;

    while payload.len() - offset >= 2 {
        // Type (7 bits) | Length (9 bits)
        let header = u16::from_be_bytes([payload[offset], payload[offset + 1]]);
        offset += 2;

        let tlv_type = (header >> 9) as u8;
        let tlv_len = (header & 0x1FF) as usize;

        if tlv_len == 0 || offset + tlv_len > payload.len() {
            break;
        }
        let value = &payload[offset..offset + tlv_len];
        offset += tlv_len;

        match LldpTlvType::from_u8(tlv_type) {
            Some(LldpTlvType::EndOfLldpdu) => break,
            // First value byte is the subtype
            Some(LldpTlvType::ChassisId) if value.len() > 1 => {
                fields.chassis_id = String::from_utf8_lossy(&value[1..]).into_owned();
            }
            Some(LldpTlvType::PortId) if value.len() > 1 => {
                fields.port_id = String::from_utf8_lossy(&value[1..]).into_owned();
            }
            Some(LldpTlvType::SystemName) => {
                fields.system_name = String::from_utf8_lossy(value).into_owned();
            }
            _ => {}
        }
    }

    fields
}

/// LLDP TLV (Type-Length-Value)
#[derive(Debug, Clone)]
pub struct LldpTlv {
    pub tlv_type: u8,
    pub value: Vec<u8>,
}

impl LldpTlv {
    pub fn new(tlv_type: u8, value: Vec<u8>) -> Self {
        Self { tlv_type, value }
    }

    pub fn chassis_id(subtype: u8, id: &[u8]) -> Self {
        let mut value = Vec::with_capacity(id.len() + 1);
        value.push(subtype);
        value.extend_from_slice(id);
        Self::new(LldpTlvType::ChassisId as u8, value)
    }

    pub fn port_id(subtype: u8, id: &[u8]) -> Self {
        let mut value = Vec::with_capacity(id.len() + 1);
        value.push(subtype);
        value.extend_from_slice(id);
        Self::new(LldpTlvType::PortId as u8, value)
    }

    pub fn ttl(seconds: u16) -> Self {
        Self::new(LldpTlvType::Ttl as u8, seconds.to_be_bytes().to_vec())
    }

    pub fn port_description(desc: &str) -> Self {
        Self::new(LldpTlvType::PortDescription as u8, desc.as_bytes().to_vec())
    }

    pub fn system_name(name: &str) -> Self {
        Self::new(LldpTlvType::SystemName as u8, name.as_bytes().to_vec())
    }

    pub fn end_of_lldpdu() -> Self {
        Self::new(LldpTlvType::EndOfLldpdu as u8, vec![])
    }

    /// Encode TLV to bytes; values longer than the 9-bit length field are truncated
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.value.len().min(MAX_TLV_LENGTH);
        let mut bytes = Vec::with_capacity(2 + len);

        let type_length = ((self.tlv_type as u16 & 0x7F) << 9) | len as u16;
        bytes.extend_from_slice(&type_length.to_be_bytes());
        bytes.extend_from_slice(&self.value[..len]);

        bytes
    }
}

/// An LLDPDU assembled from TLVs
#[derive(Debug, Clone, Default)]
pub struct LldpPdu {
    pub tlvs: Vec<LldpTlv>,
}

impl LldpPdu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chassis, port, TTL, optional system name, End-of-LLDPDU
    pub fn announcement(chassis_id: &str, port_id: &str, system_name: Option<&str>) -> Self {
        let mut pdu = Self::new()
            .with_tlv(LldpTlv::chassis_id(
                CHASSIS_SUBTYPE_LOCAL,
                chassis_id.as_bytes(),
            ))
            .with_tlv(LldpTlv::port_id(
                PORT_SUBTYPE_INTERFACE_NAME,
                port_id.as_bytes(),
            ))
            .with_tlv(LldpTlv::ttl(120));
        if let Some(name) = system_name {
            pdu = pdu.with_tlv(LldpTlv::system_name(name));
        }
        pdu.with_tlv(LldpTlv::end_of_lldpdu())
    }

    pub fn with_tlv(mut self, tlv: LldpTlv) -> Self {
        self.tlvs.push(tlv);
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = BytesMut::new();
        for tlv in &self.tlvs {
            bytes.put_slice(&tlv.to_bytes());
        }
        bytes.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlv_encoding() {
        let tlv = LldpTlv::system_name("TestRouter");
        let bytes = tlv.to_bytes();

        // Type 5 (SystemName), length 10
        assert_eq!(bytes[0], 0x0A); // (5 << 1) = 10
        assert_eq!(bytes[1], 0x0A);
        assert_eq!(&bytes[2..], b"TestRouter");
    }

    #[test]
    fn test_decode_well_formed_pdu() {
        let pdu = LldpPdu::announcement("core1", "Gi0/1", Some("core1.example.net"));
        let fields = decode_lldp_fields(&pdu.to_bytes());

        assert_eq!(fields.chassis_id, "core1");
        assert_eq!(fields.port_id, "Gi0/1");
        assert_eq!(fields.system_name, "core1.example.net");
    }

    #[test]
    fn test_decode_strips_subtype_bytes() {
        let payload = [
            0x02, 0x04, 0x07, b's', b'w', b'1', // chassis id, subtype 7
            0x04, 0x03, 0x05, b'p', b'1', // port id, subtype 5
            0x00, 0x00,
        ];
        let fields = decode_lldp_fields(&payload);
        assert_eq!(fields.chassis_id, "sw1");
        assert_eq!(fields.port_id, "p1");
        assert!(fields.system_name.is_empty());
    }

    #[test]
    fn test_decode_empty_payload() {
        assert_eq!(decode_lldp_fields(&[]), LldpFields::default());
    }

    #[test]
    fn test_decode_single_byte_payload() {
        assert_eq!(decode_lldp_fields(&[0x02]), LldpFields::default());
    }

    #[test]
    fn test_overlong_tlv_keeps_earlier_fields() {
        let mut payload = LldpPdu::new()
            .with_tlv(LldpTlv::chassis_id(CHASSIS_SUBTYPE_LOCAL, b"sw1"))
            .with_tlv(LldpTlv::port_id(PORT_SUBTYPE_INTERFACE_NAME, b"Gi0/7"))
            .to_bytes();
        // System name claiming 40 bytes with only 4 present
        payload.extend_from_slice(&[0x0A, 0x28, b'a', b'b', b'c', b'd']);

        let fields = decode_lldp_fields(&payload);
        assert_eq!(fields.chassis_id, "sw1");
        assert_eq!(fields.port_id, "Gi0/7");
        assert!(fields.system_name.is_empty());
    }

    #[test]
    fn test_stops_at_end_of_lldpdu() {
        let mut payload = LldpPdu::announcement("sw1", "p1", None).to_bytes();
        payload.extend_from_slice(&LldpTlv::system_name("after-end").to_bytes());

        let fields = decode_lldp_fields(&payload);
        assert_eq!(fields.chassis_id, "sw1");
        assert!(fields.system_name.is_empty());
    }

    #[test]
    fn test_zero_length_tlv_stops_decoding() {
        let mut payload = LldpTlv::chassis_id(CHASSIS_SUBTYPE_LOCAL, b"sw1").to_bytes();
        payload.extend_from_slice(&[0x08, 0x00]); // port description, length 0
        payload.extend_from_slice(&LldpTlv::system_name("hidden").to_bytes());

        let fields = decode_lldp_fields(&payload);
        assert_eq!(fields.chassis_id, "sw1");
        assert!(fields.system_name.is_empty());
    }

    #[test]
    fn test_unknown_tlvs_are_skipped() {
        let payload = LldpPdu::new()
            .with_tlv(LldpTlv::chassis_id(CHASSIS_SUBTYPE_LOCAL, b"sw1"))
            .with_tlv(LldpTlv::ttl(120))
            .with_tlv(LldpTlv::port_description("uplink"))
            .with_tlv(LldpTlv::new(127, vec![0x00, 0x80, 0xC2, 0x01, 0x00, 0x01]))
            .with_tlv(LldpTlv::system_name("sw1.lab"))
            .with_tlv(LldpTlv::end_of_lldpdu())
            .to_bytes();

        let fields = decode_lldp_fields(&payload);
        assert_eq!(fields.chassis_id, "sw1");
        assert_eq!(fields.system_name, "sw1.lab");
        assert!(fields.port_id.is_empty());
    }

    #[test]
    fn test_subtype_only_value_keeps_previous_field() {
        let payload = LldpPdu::new()
            .with_tlv(LldpTlv::chassis_id(CHASSIS_SUBTYPE_LOCAL, b"sw1"))
            .with_tlv(LldpTlv::chassis_id(CHASSIS_SUBTYPE_LOCAL, b""))
            .to_bytes();

        assert_eq!(decode_lldp_fields(&payload).chassis_id, "sw1");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let payload = LldpTlv::system_name("").to_bytes();
        assert!(decode_lldp_fields(&payload).system_name.is_empty());

        let payload = [0x0A, 0x02, 0xFF, b'x'];
        assert_eq!(decode_lldp_fields(&payload).system_name, "\u{FFFD}x");
    }

    #[test]
    fn test_remote_device_name_fallback() {
        let fields = LldpFields {
            chassis_id: "sw1".into(),
            ..Default::default()
        };
        assert_eq!(fields.remote_device_name(), "sw1");

        assert_eq!(LldpFields::default().remote_device_name(), UNKNOWN_REMOTE);

        let fields = LldpFields {
            chassis_id: "sw1".into(),
            port_id: "Gi0/1".into(),
            system_name: "switch-one".into(),
        };
        assert_eq!(fields.remote_device_name(), "switch-one");
    }

    #[test]
    fn test_oversized_value_is_truncated_on_encode() {
        let tlv = LldpTlv::system_name(&"x".repeat(600));
        let bytes = tlv.to_bytes();
        assert_eq!(bytes.len(), 2 + MAX_TLV_LENGTH);
        assert_eq!(decode_lldp_fields(&bytes).system_name.len(), MAX_TLV_LENGTH);
    }
}
