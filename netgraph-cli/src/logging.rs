//! Logging setup
//!
//! Logs go to standard error; standard output carries only the summary and
//! the edge document.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: &[&str] = &[
    "netgraph",
    "netgraph_cli",
    "netgraph_capture",
    "netgraph_protocols",
    "netgraph_packet",
    "netgraph_core",
];

/// Filter used when `RUST_LOG` is not set
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    std::iter::once("warn".to_string())
        .chain(CRATES.iter().map(|krate| format!("{}={}", krate, level)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `-v`
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(default_directives(0).contains("netgraph_capture=info"));
        assert!(default_directives(1).contains("netgraph_capture=debug"));
        assert!(default_directives(5).contains("netgraph_capture=trace"));
        assert!(default_directives(0).starts_with("warn,"));
    }

    #[test]
    fn test_directives_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
