//! Capture supervisor: one worker thread per interface, one shutdown token

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use netgraph_core::{Edge, EdgeRegistry, Error, NeighborInfo, NeighborRegistry, Result};
use tracing::{error, info, warn};

use crate::capture::{CaptureBackend, CaptureConfig, PcapBackend};
use crate::interface::{local_hostname, InterfaceInfo};
use crate::shutdown::ShutdownToken;
use crate::worker::{CaptureWorker, WorkerReport};

/// Supervisor configuration
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Device name for the local side of every edge
    pub hostname: String,
    /// Stop after this long; `None` or zero runs until the token is cancelled
    pub duration: Option<Duration>,
    /// Capture only on these interfaces (empty = all)
    pub interfaces: Vec<String>,
    pub capture: CaptureConfig,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            hostname: local_hostname(),
            duration: None,
            interfaces: Vec::new(),
            capture: CaptureConfig::default(),
        }
    }
}

/// Everything discovered during one run
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Edges in arrival order
    pub edges: Vec<Edge>,
    /// Neighbor sightings sorted by key
    pub neighbors: Vec<(String, NeighborInfo)>,
    /// One report per worker that returned normally
    pub reports: Vec<WorkerReport>,
}

pub struct Supervisor {
    config: SupervisorConfig,
    backend: Arc<dyn CaptureBackend>,
    token: ShutdownToken,
    edges: Arc<EdgeRegistry>,
    neighbors: Arc<NeighborRegistry>,
}

impl Supervisor {
    pub fn new(config: SupervisorConfig, backend: Arc<dyn CaptureBackend>) -> Self {
        Self {
            config,
            backend,
            token: ShutdownToken::new(),
            edges: Arc::new(EdgeRegistry::new()),
            neighbors: Arc::new(NeighborRegistry::new()),
        }
    }

    /// Supervisor over live pcap handles
    pub fn with_pcap(config: SupervisorConfig) -> Self {
        Self::new(config, Arc::new(PcapBackend))
    }

    /// Token that stops the run when cancelled
    pub fn shutdown_token(&self) -> ShutdownToken {
        self.token.clone()
    }

    /// Capture until the duration elapses or the token is cancelled
    ///
    /// Blocks until every worker has returned. Only enumeration failures are
    /// errors; per-interface failures show up in the worker reports.
    pub fn run(self) -> Result<Discovery> {
        let interfaces = self.select_interfaces()?;
        info!(
            "Starting capture on {} interface(s) as '{}'",
            interfaces.len(),
            self.config.hostname
        );

        let workers: Vec<(String, JoinHandle<WorkerReport>)> = interfaces
            .into_iter()
            .filter_map(|iface| self.spawn_worker(iface))
            .collect();

        match self.config.duration.filter(|d| !d.is_zero()) {
            Some(duration) => {
                if !self.token.wait_timeout(duration) {
                    info!("Capture duration of {:?} elapsed", duration);
                    self.token.cancel();
                }
            }
            None => self.token.wait(),
        }
        info!("Stopping capture, waiting for {} worker(s)", workers.len());

        let mut reports = Vec::with_capacity(workers.len());
        for (name, handle) in workers {
            match handle.join() {
                Ok(report) => reports.push(report),
                Err(_) => error!("Capture worker for {} panicked", name),
            }
        }

        let failed = reports.iter().filter(|r| r.exit.is_failure()).count();
        if failed > 0 {
            warn!("{} of {} capture worker(s) failed", failed, reports.len());
        }

        let discovery = Discovery {
            edges: self.edges.snapshot(),
            neighbors: self.neighbors.snapshot(),
            reports,
        };
        info!(
            "Capture finished: {} edge(s), {} neighbor sighting(s)",
            discovery.edges.len(),
            discovery.neighbors.len()
        );
        Ok(discovery)
    }

    fn select_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        let available = self.backend.interfaces().map_err(|e| match e {
            Error::Enumeration(_) => e,
            other => Error::Enumeration(other.to_string()),
        })?;

        let selected: Vec<InterfaceInfo> = if self.config.interfaces.is_empty() {
            available
        } else {
            let mut selected = Vec::new();
            for name in &self.config.interfaces {
                match available.iter().find(|iface| &iface.name == name) {
                    Some(iface) => selected.push(iface.clone()),
                    None => warn!("{}", Error::InterfaceNotFound(name.clone())),
                }
            }
            selected
        };

        if selected.is_empty() {
            return Err(Error::Enumeration(
                "No interfaces available for capture".to_string(),
            ));
        }
        Ok(selected)
    }

    fn spawn_worker(&self, iface: InterfaceInfo) -> Option<(String, JoinHandle<WorkerReport>)> {
        let name = iface.name.clone();
        let worker = CaptureWorker::new(
            &self.config.hostname,
            iface,
            self.config.capture.clone(),
            Arc::clone(&self.edges),
            Arc::clone(&self.neighbors),
            self.token.clone(),
        );
        let backend = Arc::clone(&self.backend);

        match thread::Builder::new()
            .name(format!("capture-{}", name))
            .spawn(move || worker.run(backend.as_ref()))
        {
            Ok(handle) => Some((name, handle)),
            Err(e) => {
                error!("Failed to start capture thread for {}: {}", name, e);
                None
            }
        }
    }
}
