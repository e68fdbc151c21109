//! Error types for netgraph

use thiserror::Error;

/// Result type alias for netgraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netgraph
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interfaces could not be enumerated, or none are available
    #[error("Interface enumeration failed: {0}")]
    Enumeration(String),

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// A live capture handle could not be opened
    #[error("Failed to open capture on '{interface}': {reason}")]
    CaptureOpen { interface: String, reason: String },

    /// The protocol filter could not be installed on a capture handle
    #[error("Failed to install filter on '{interface}': {reason}")]
    Filter { interface: String, reason: String },

    /// Reading from a capture handle failed
    #[error("Read failed on '{interface}': {reason}")]
    Read { interface: String, reason: String },

    /// Packet parsing error
    #[error("Packet parsing error: {0}")]
    PacketParsing(String),

    /// The output destination could not be written
    #[error("Failed to write output to '{path}': {reason}")]
    Output { path: String, reason: String },
}

impl Error {
    /// Create a packet parsing error with a custom message
    pub fn parsing<S: Into<String>>(msg: S) -> Self {
        Error::PacketParsing(msg.into())
    }

    /// Create a capture-open error for an interface
    pub fn capture_open<I: Into<String>, R: ToString>(interface: I, reason: R) -> Self {
        Error::CaptureOpen {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a filter-install error for an interface
    pub fn filter<I: Into<String>, R: ToString>(interface: I, reason: R) -> Self {
        Error::Filter {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a read error for an interface
    pub fn read<I: Into<String>, R: ToString>(interface: I, reason: R) -> Self {
        Error::Read {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error should abort the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Enumeration(_))
    }
}
