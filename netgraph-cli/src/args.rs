//! CLI argument parsing
//!
//! Flags follow the single-dash long style as well as the usual double-dash
//! one: `-out edges.json`, `-duration=30` and `--duration 30` are equivalent.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use netgraph_capture::{local_hostname, CaptureConfig, SupervisorConfig};

use crate::output::OutputFormat;

/// Long flags that may also be written with a single dash
const LONG_FLAGS: &[&str] = &[
    "out", "duration", "format", "interface", "verbose", "help", "version",
];

#[derive(Parser, Debug)]
#[command(name = "netgraph")]
#[command(version, about = "Passive LLDP/CDP/ARP link-topology discovery", long_about = None)]
pub struct Cli {
    /// Write the JSON edge list to this file instead of standard output
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Stop after this many seconds (0 = until interrupted)
    #[arg(long, value_name = "SECONDS", default_value = "0")]
    pub duration: u64,

    /// Output document shape
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Capture only on this interface (repeatable; default: all)
    #[arg(short = 'i', long = "interface", value_name = "NAME")]
    pub interfaces: Vec<String>,

    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_long_flags(std::env::args_os()))
    }

    /// Capture duration, `None` when unbounded
    pub fn capture_duration(&self) -> Option<Duration> {
        (self.duration > 0).then(|| Duration::from_secs(self.duration))
    }

    /// Build the supervisor configuration; resolves the local hostname
    pub fn supervisor_config(&self) -> SupervisorConfig {
        SupervisorConfig {
            hostname: local_hostname(),
            duration: self.capture_duration(),
            interfaces: self.interfaces.clone(),
            capture: CaptureConfig::default(),
        }
    }
}

/// Rewrite `-flag` and `-flag=value` into `--flag` forms clap understands
///
/// Only known long flag names are rewritten, so short flags like `-vv` and
/// `-i eth0` pass through. Nothing after a bare `--` is touched.
pub fn normalize_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
