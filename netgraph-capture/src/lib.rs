//! Packet capture for netgraph
//!
//! This crate runs the passive side of discovery: one capture worker per local
//! interface, all sharing the edge and neighbor registries and a single
//! shutdown token, coordinated by a [`Supervisor`].
//!
//! ## Features
//!
//! - **Interface Enumeration**: pcap devices merged with their hardware addresses
//! - **BPF Filters**: one filter that passes LLDP, CDP (both framings) and ARP
//! - **Backend Seam**: [`CaptureBackend`]/[`FrameSource`] so workers can run
//!   against pcap or against scripted sources in tests
//! - **Statistics**: per-worker frame and protocol counters
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use netgraph_capture::{Supervisor, SupervisorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SupervisorConfig {
//!     duration: Some(Duration::from_secs(30)),
//!     ..SupervisorConfig::default()
//! };
//!
//! let discovery = Supervisor::with_pcap(config).run()?;
//! println!("{} edges", discovery.edges.len());
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod filters;
pub mod interface;
pub mod shutdown;
pub mod stats;
pub mod supervisor;
pub mod worker;

// Re-export main types
pub use capture::{CaptureBackend, CaptureConfig, FrameSource, PcapBackend, ReadOutcome};
pub use interface::{list_interfaces, local_hostname, InterfaceInfo, UNKNOWN_HOST};
pub use shutdown::ShutdownToken;
pub use stats::{CaptureStats, StatsAccumulator};
pub use supervisor::{Discovery, Supervisor, SupervisorConfig};
pub use worker::{CaptureWorker, WorkerExit, WorkerReport};
