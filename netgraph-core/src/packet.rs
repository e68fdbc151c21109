//! Packet types

use std::time::SystemTime;

/// A frame captured on a local interface
#[derive(Debug, Clone)]
pub struct Packet {
    /// When the packet was captured
    pub timestamp: SystemTime,
    /// Interface the packet was received on
    pub interface: String,
    /// Packet data (including the link-layer header)
    pub data: Vec<u8>,
}

impl Packet {
    /// Create a new packet stamped with the current time
    pub fn new(interface: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            timestamp: SystemTime::now(),
            interface: interface.into(),
            data,
        }
    }

    /// Get packet data as slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get packet length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if packet is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
