//! Network interface enumeration and host identity

use std::collections::HashMap;

use netgraph_core::{Error, MacAddr, Result};
use pcap::Device;
use tracing::debug;

/// Device name used for the local side of every edge when the hostname is unavailable
pub const UNKNOWN_HOST: &str = "UnknownHost";

/// Information about a capturable interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// Interface name (e.g., "eth0")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Hardware address, if the interface has a non-zero one
    pub mac: Option<MacAddr>,
    /// Whether the interface is up
    pub is_up: bool,
    /// Whether the interface is a loopback
    pub is_loopback: bool,
}

impl InterfaceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            mac: None,
            is_up: true,
            is_loopback: false,
        }
    }

    pub fn with_mac(mut self, mac: MacAddr) -> Self {
        self.mac = (!mac.is_zero()).then_some(mac);
        self
    }

    fn from_device(device: Device, macs: &HashMap<String, MacAddr>) -> Self {
        InterfaceInfo {
            mac: macs.get(&device.name).copied(),
            description: device.desc.unwrap_or_default(),
            is_up: device.flags.is_up(),
            is_loopback: device.flags.is_loopback(),
            name: device.name,
        }
    }
}

/// Hardware addresses by interface name; all-zero addresses are left out
fn hardware_addresses() -> HashMap<String, MacAddr> {
    pnet_datalink::interfaces()
        .into_iter()
        .filter_map(|iface| {
            let mac = iface.mac?;
            let mac = MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]);
            (!mac.is_zero()).then_some((iface.name, mac))
        })
        .collect()
}

/// List every device pcap can open, with its MAC address when known
pub fn list_interfaces() -> Result<Vec<InterfaceInfo>> {
    let devices = Device::list().map_err(|e| Error::Enumeration(e.to_string()))?;

    if devices.is_empty() {
        return Err(Error::Enumeration(
            "No capture devices found. Are you running with sufficient privileges?".to_string(),
        ));
    }

    let macs = hardware_addresses();
    let interfaces: Vec<InterfaceInfo> = devices
        .into_iter()
        .map(|device| InterfaceInfo::from_device(device, &macs))
        .collect();

    debug!(
        "Enumerated interfaces: {}",
        interfaces
            .iter()
            .map(|iface| iface.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(interfaces)
}

/// Name of this host, or [`UNKNOWN_HOST`] if it cannot be determined
pub fn local_hostname() -> String {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    if name.is_empty() {
        UNKNOWN_HOST.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mac_is_dropped() {
        let iface = InterfaceInfo::new("eth0").with_mac(MacAddr::zero());
        assert_eq!(iface.mac, None);

        let mac: MacAddr = "02:00:00:00:00:01".parse().unwrap();
        let iface = InterfaceInfo::new("eth0").with_mac(mac);
        assert_eq!(iface.mac, Some(mac));
    }

    #[test]
    fn test_hardware_addresses_exclude_zero() {
        // Loopback reports 00:00:00:00:00:00 on Linux
        assert!(hardware_addresses().values().all(|mac| !mac.is_zero()));
    }

    #[test]
    fn test_local_hostname_never_empty() {
        assert!(!local_hostname().is_empty());
    }
}
