//! Per-interface context shared by the protocol handlers

use netgraph_core::MacAddr;

/// Identity of the receiving side of every frame seen on one interface
///
/// Built once per capture worker; the interface MAC is resolved at that time
/// and not looked up again per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    /// Resolved name of this host
    pub hostname: String,
    /// Interface the frames arrive on
    pub interface: String,
    /// Hardware address of that interface, if known
    pub interface_mac: Option<MacAddr>,
}

impl LinkContext {
    pub fn new(
        hostname: impl Into<String>,
        interface: impl Into<String>,
        interface_mac: Option<MacAddr>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            interface: interface.into(),
            interface_mac,
        }
    }
}
