//! Capture backend seam and the pcap implementation

use netgraph_core::{Error, Packet, Result};
use pcap::{Active, Capture, Device, Linktype};
use tracing::debug;

use crate::filters;
use crate::interface::{list_interfaces, InterfaceInfo};

/// Default snapshot length (maximum bytes per packet)
const DEFAULT_SNAPLEN: i32 = 65535;

/// Default read timeout (milliseconds); bounds how long cancellation can go unnoticed
const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for packet capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per packet
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Enable immediate mode (deliver packets immediately)
    pub immediate_mode: bool,
    /// BPF filter installed on every handle
    pub filter: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
            filter: filters::discovery_filter(),
        }
    }
}

/// Result of one poll on a capture handle
#[derive(Debug)]
pub enum ReadOutcome {
    /// A frame arrived
    Frame(Packet),
    /// The read timeout expired with nothing to deliver
    TimedOut,
    /// The source has no more frames
    Ended,
}

/// An open capture handle on one interface
pub trait FrameSource {
    /// Install a BPF filter
    fn set_filter(&mut self, bpf: &str) -> Result<()>;

    /// Block for at most the read timeout waiting for the next frame
    fn next_frame(&mut self) -> Result<ReadOutcome>;
}

/// Where interfaces and capture handles come from
pub trait CaptureBackend: Send + Sync {
    /// List the interfaces that can be captured on
    fn interfaces(&self) -> Result<Vec<InterfaceInfo>>;

    /// Open a live handle; only Ethernet link types are accepted
    fn open(&self, interface: &InterfaceInfo, config: &CaptureConfig)
        -> Result<Box<dyn FrameSource>>;
}

/// Live capture through libpcap
#[derive(Debug, Clone, Copy, Default)]
pub struct PcapBackend;

impl CaptureBackend for PcapBackend {
    fn interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        list_interfaces()
    }

    fn open(
        &self,
        interface: &InterfaceInfo,
        config: &CaptureConfig,
    ) -> Result<Box<dyn FrameSource>> {
        debug!("Initializing pcap capture on {}", interface.name);

        let device = Device::from(interface.name.as_str());
        let capture = Capture::from_device(device)
            .map_err(|e| Error::capture_open(&interface.name, e))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| Error::capture_open(&interface.name, e))?;

        let linktype = capture.get_datalink();
        if linktype != Linktype::ETHERNET {
            return Err(Error::capture_open(
                &interface.name,
                format!("unsupported link type {:?}", linktype),
            ));
        }

        Ok(Box::new(PcapSource {
            interface: interface.name.clone(),
            capture,
        }))
    }
}

/// An active pcap handle
pub struct PcapSource {
    interface: String,
    capture: Capture<Active>,
}

impl FrameSource for PcapSource {
    fn set_filter(&mut self, bpf: &str) -> Result<()> {
        self.capture
            .filter(bpf, true)
            .map_err(|e| Error::filter(&self.interface, e))?;
        debug!("Applied filter on {}: {}", self.interface, bpf);
        Ok(())
    }

    fn next_frame(&mut self) -> Result<ReadOutcome> {
        match self.capture.next_packet() {
            Ok(packet) => Ok(ReadOutcome::Frame(Packet::new(
                &self.interface,
                packet.data.to_vec(),
            ))),
            Err(pcap::Error::TimeoutExpired) => Ok(ReadOutcome::TimedOut),
            Err(pcap::Error::NoMorePackets) => Ok(ReadOutcome::Ended),
            Err(e) => Err(Error::read(&self.interface, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_config_default() {
        let config = CaptureConfig::default();
        assert_eq!(config.snaplen, DEFAULT_SNAPLEN);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.promiscuous);
        assert!(config.immediate_mode);
        assert_eq!(config.filter, filters::discovery_filter());
    }

    #[test]
    fn test_open_unknown_device_fails() {
        let iface = InterfaceInfo::new("nonexistent_interface_xyz");
        match PcapBackend.open(&iface, &CaptureConfig::default()) {
            Err(Error::CaptureOpen { interface, .. }) => {
                assert_eq!(interface, "nonexistent_interface_xyz")
            }
            Err(other) => panic!("Expected CaptureOpen error, got {}", other),
            Ok(_) => panic!("Opening a nonexistent device succeeded"),
        }
    }
}
