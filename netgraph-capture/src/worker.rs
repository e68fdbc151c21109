//! Capture worker: one live handle on one interface
//!
//! A worker moves through three states:
//!
//! - **Opening**: open the handle and install the filter. A failure here ends
//!   this worker only.
//! - **Polling**: pull frames and process each one before the next poll. The
//!   shutdown token is checked before every poll, so a read timeout bounds how
//!   long a cancelled worker keeps running.
//! - **Closed**: the handle is dropped and a [`WorkerReport`] is returned.

use std::fmt;
use std::sync::Arc;

use netgraph_core::{EdgeRegistry, NeighborRegistry};
use netgraph_protocols::{FrameProcessor, LinkContext};
use tracing::{debug, info, trace, warn};

use crate::capture::{CaptureBackend, CaptureConfig, FrameSource, ReadOutcome};
use crate::interface::InterfaceInfo;
use crate::shutdown::ShutdownToken;
use crate::stats::{CaptureStats, StatsAccumulator};

/// Why a worker stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerExit {
    /// The shutdown token fired
    Cancelled,
    /// The source reported end of stream
    StreamEnded,
    /// The handle could not be opened
    OpenFailed(String),
    /// The filter could not be installed
    FilterFailed(String),
    /// A read failed
    ReadFailed(String),
}

impl WorkerExit {
    pub fn is_failure(&self) -> bool {
        !matches!(self, WorkerExit::Cancelled | WorkerExit::StreamEnded)
    }
}

impl fmt::Display for WorkerExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerExit::Cancelled => write!(f, "cancelled"),
            WorkerExit::StreamEnded => write!(f, "end of stream"),
            WorkerExit::OpenFailed(reason) => write!(f, "open failed: {}", reason),
            WorkerExit::FilterFailed(reason) => write!(f, "filter failed: {}", reason),
            WorkerExit::ReadFailed(reason) => write!(f, "read failed: {}", reason),
        }
    }
}

/// Outcome of one worker
#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub interface: String,
    pub exit: WorkerExit,
    pub stats: CaptureStats,
}

pub struct CaptureWorker {
    interface: InterfaceInfo,
    config: CaptureConfig,
    processor: FrameProcessor,
    token: ShutdownToken,
    stats: StatsAccumulator,
}

impl CaptureWorker {
    /// Create a worker; the interface MAC is taken from `interface` here and never refreshed
    pub fn new(
        hostname: &str,
        interface: InterfaceInfo,
        config: CaptureConfig,
        edges: Arc<EdgeRegistry>,
        neighbors: Arc<NeighborRegistry>,
        token: ShutdownToken,
    ) -> Self {
        let ctx = LinkContext::new(hostname, &interface.name, interface.mac);
        Self {
            processor: FrameProcessor::new(ctx, edges, neighbors),
            interface,
            config,
            token,
            stats: StatsAccumulator::new(),
        }
    }

    /// Run to completion on the calling thread
    pub fn run(self, backend: &dyn CaptureBackend) -> WorkerReport {
        let exit = match self.open(backend) {
            Ok(mut source) => {
                info!(
                    "Capturing on interface {} with filter ({})",
                    self.interface.name, self.config.filter
                );
                self.poll(source.as_mut())
            }
            Err(exit) => exit,
        };

        let stats = self.stats.snapshot();
        info!(
            "Capture on {} stopped ({}): {}",
            self.interface.name,
            exit,
            stats.format()
        );

        WorkerReport {
            interface: self.interface.name,
            exit,
            stats,
        }
    }

    fn open(&self, backend: &dyn CaptureBackend) -> Result<Box<dyn FrameSource>, WorkerExit> {
        let mut source = backend.open(&self.interface, &self.config).map_err(|e| {
            warn!("{}", e);
            WorkerExit::OpenFailed(e.to_string())
        })?;

        source.set_filter(&self.config.filter).map_err(|e| {
            warn!("{}", e);
            WorkerExit::FilterFailed(e.to_string())
        })?;

        Ok(source)
    }

    fn poll(&self, source: &mut dyn FrameSource) -> WorkerExit {
        loop {
            if self.token.is_cancelled() {
                return WorkerExit::Cancelled;
            }

            match source.next_frame() {
                Ok(ReadOutcome::Frame(packet)) => {
                    trace!("Got frame on {} (len={})", self.interface.name, packet.len());
                    self.stats.record_frame(packet.len());
                    let outcome = self.processor.process(packet.data());
                    self.stats.record_outcome(outcome);
                }
                Ok(ReadOutcome::TimedOut) => continue,
                Ok(ReadOutcome::Ended) => {
                    debug!("Capture stream on {} ended", self.interface.name);
                    return WorkerExit::StreamEnded;
                }
                Err(e) => {
                    warn!("{}", e);
                    return WorkerExit::ReadFailed(e.to_string());
                }
            }
        }
    }
}
