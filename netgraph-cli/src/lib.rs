//! CLI interface for netgraph
//!
//! This crate provides the `netgraph` binary's argument parsing, logging
//! setup and output formatting.

pub mod args;
pub mod logging;
pub mod output;

pub use args::{normalize_long_flags, Cli};
pub use output::{emit, render_edges, render_summary, OutputFormat};
