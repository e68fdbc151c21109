//! Per-worker capture statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use netgraph_protocols::{DiscoveryProtocol, FrameOutcome};

/// Counters for one capture worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Frames delivered by the capture handle
    pub frames: u64,
    /// Total bytes delivered
    pub bytes: u64,
    /// LLDP frames turned into edges
    pub lldp: u64,
    /// CDP sightings recorded
    pub cdp: u64,
    /// ARP sightings recorded
    pub arp: u64,
    /// Frames of other protocols
    pub ignored: u64,
    /// Frames that could not be decoded
    pub malformed: u64,
    /// Time spent polling
    pub duration: Duration,
}

impl CaptureStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames that ended up in a registry
    pub fn recorded(&self) -> u64 {
        self.lldp + self.cdp + self.arp
    }

    /// Format statistics as a single log line
    pub fn format(&self) -> String {
        format!(
            "{} frames ({} bytes) in {:.1}s: LLDP {}, CDP {}, ARP {}, ignored {}, malformed {}",
            self.frames,
            self.bytes,
            self.duration.as_secs_f64(),
            self.lldp,
            self.cdp,
            self.arp,
            self.ignored,
            self.malformed
        )
    }
}

/// Statistics accumulator for live capture
#[derive(Debug)]
pub struct StatsAccumulator {
    frames: AtomicU64,
    bytes: AtomicU64,
    lldp: AtomicU64,
    cdp: AtomicU64,
    arp: AtomicU64,
    ignored: AtomicU64,
    malformed: AtomicU64,
    start_time: Instant,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            frames: AtomicU64::new(0),
            bytes: AtomicU64::new(0),
            lldp: AtomicU64::new(0),
            cdp: AtomicU64::new(0),
            arp: AtomicU64::new(0),
            ignored: AtomicU64::new(0),
            malformed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a received frame
    pub fn record_frame(&self, size: usize) {
        self.frames.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(size as u64, Ordering::Relaxed);
    }

    /// Record what the frame processor did with a frame
    pub fn record_outcome(&self, outcome: FrameOutcome) {
        let counter = match outcome {
            FrameOutcome::Recorded(DiscoveryProtocol::Lldp) => &self.lldp,
            FrameOutcome::Recorded(DiscoveryProtocol::Cdp) => &self.cdp,
            FrameOutcome::Recorded(DiscoveryProtocol::Arp) => &self.arp,
            FrameOutcome::Ignored => &self.ignored,
            FrameOutcome::Malformed => &self.malformed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current statistics snapshot
    pub fn snapshot(&self) -> CaptureStats {
        CaptureStats {
            frames: self.frames.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
            lldp: self.lldp.load(Ordering::Relaxed),
            cdp: self.cdp.load(Ordering::Relaxed),
            arp: self.arp.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
            duration: self.start_time.elapsed(),
        }
    }
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
