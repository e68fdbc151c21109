//! netgraph entry point
//!
//! Captures on every interface until the duration elapses or SIGINT/SIGTERM
//! arrives, then prints what was discovered.

use std::io;
use std::process::ExitCode;

use netgraph_capture::{ShutdownToken, Supervisor};
use netgraph_cli::{emit, logging, Cli};
use tokio::signal;
use tracing::{error, info};

/// Cancel `token` on the first SIGINT or SIGTERM
async fn shutdown_signal(token: ShutdownToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received interrupt signal, stopping captures...");
    token.cancel();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    let supervisor = Supervisor::with_pcap(cli.supervisor_config());
    let token = supervisor.shutdown_token();
    let signals = tokio::spawn(shutdown_signal(token));

    match cli.capture_duration() {
        Some(duration) => info!("Capturing for {} seconds...", duration.as_secs()),
        None => info!("Capturing until Ctrl+C..."),
    }

    let result = tokio::task::spawn_blocking(move || supervisor.run()).await;
    signals.abort();

    let discovery = match result {
        Ok(Ok(discovery)) => discovery,
        Ok(Err(e)) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Capture supervisor failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = emit(&mut stdout, &discovery, cli.format, cli.out.as_deref()) {
        error!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
