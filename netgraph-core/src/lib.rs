//! netgraph core library
//!
//! This crate provides the shared types for the netgraph link-topology discovery
//! tool: the error type, MAC addresses, captured packets, the topology model
//! (`Node`/`Edge`), auxiliary neighbor sightings, and the two concurrent
//! registries that capture workers write into.

pub mod error;
pub mod neighbor;
pub mod packet;
pub mod registry;
pub mod topology;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use neighbor::{NeighborInfo, NeighborProtocol};
pub use packet::Packet;
pub use registry::{EdgeRegistry, NeighborRegistry};
pub use topology::{Edge, Node};
pub use types::MacAddr;
