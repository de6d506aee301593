//! Server setup and lifecycle management.

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::storage::{InMemoryJobQueue, InMemoryResultStore, JobQueue, ResultStore};
use crate::worker::ResearchWorker;
use genomelab_artifacts::{ArtifactStore, FsArtifactStore};
use genomelab_engine::ResearchEngine;
use genomelab_oracle::{
    DesignOracle, NoopQueryRefiner, NoopSearchProvider, OpenAiDesignOracle, OracleBackend,
    OracleConfig, PromptRefinementService, QueryRefiner, SimulatedDesignOracle,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// GenomeLab daemon server: composition root for the queue, the store, the
/// oracle, the engine and the worker.
pub struct Server {
    config: DaemonConfig,
}

impl Server {
    /// Create a new server with the given configuration.
    pub fn new(config: DaemonConfig) -> Self {
        Self { config }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> DaemonResult<()> {
        let queue: Arc<dyn JobQueue> = Arc::new(InMemoryJobQueue::new());
        let store: Arc<dyn ResultStore> = Arc::new(InMemoryResultStore::new());
        let artifacts: Arc<dyn ArtifactStore> =
            Arc::new(FsArtifactStore::new(&self.config.output.root_dir));

        let (oracle, refiner) = build_oracle(&self.config.oracle)?;
        let engine = Arc::new(ResearchEngine::new(oracle, refiner, artifacts));

        // The shutdown channel doubles as the cooperative cancellation signal
        // for whichever job is in flight when the process exits.
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = ResearchWorker::new(
            queue.clone(),
            store.clone(),
            engine,
            Duration::from_secs(self.config.worker.poll_interval_secs),
            shutdown_rx,
        );
        let worker_handle = tokio::spawn(worker.run());

        let state = AppState::new(queue, store);
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(self.config.server.listen_addr).await?;
        tracing::info!("genomelab daemon listening on {}", self.config.server.listen_addr);
        tracing::info!(backend = ?self.config.oracle.backend, "oracle backend configured");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("genomelab daemon shutting down");

        let _ = shutdown_tx.send(true);
        let _ = worker_handle.await;

        Ok(())
    }
}

/// Wire up the configured oracle backend and its query refiner.
fn build_oracle(
    config: &OracleConfig,
) -> DaemonResult<(Arc<dyn DesignOracle>, Arc<dyn QueryRefiner>)> {
    match config.backend {
        OracleBackend::OpenAi => {
            let oracle = OpenAiDesignOracle::new(config.clone())?;
            let refiner =
                PromptRefinementService::new(config.clone(), Arc::new(NoopSearchProvider))?;
            Ok((Arc::new(oracle), Arc::new(refiner)))
        }
        OracleBackend::Simulated => Ok((
            Arc::new(SimulatedDesignOracle::new()),
            Arc::new(NoopQueryRefiner),
        )),
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received terminate signal, initiating graceful shutdown");
        }
    }
}
