//! Single sequential consumer that drains the job queue.

use crate::storage::{JobQueue, ResultStore};
use genomelab_engine::{EngineError, ResearchEngine};
use genomelab_types::ResearchJob;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Background worker: dequeues one job at a time, runs the engine to
/// completion, and publishes the outcome. The population fan-out happens
/// inside a job, never across jobs.
pub struct ResearchWorker {
    queue: Arc<dyn JobQueue>,
    store: Arc<dyn ResultStore>,
    engine: Arc<ResearchEngine>,
    poll_interval: Duration,
    shutdown: watch::Receiver<bool>,
}

impl ResearchWorker {
    pub fn new(
        queue: Arc<dyn JobQueue>,
        store: Arc<dyn ResultStore>,
        engine: Arc<ResearchEngine>,
        poll_interval: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            queue,
            store,
            engine,
            poll_interval,
            shutdown,
        }
    }

    /// Run until the shutdown signal flips.
    ///
    /// A failed job is logged and dropped; the loop itself always resumes
    /// polling. Only a normal completion publishes a result.
    pub async fn run(mut self) {
        tracing::info!("research worker started");

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            match self.queue.dequeue().await {
                Some(job) => self.process(job).await,
                None => {
                    tokio::select! {
                        _ = tokio::time::sleep(self.poll_interval) => {}
                        _ = self.shutdown.changed() => {}
                    }
                }
            }
        }

        tracing::info!("research worker stopped");
    }

    async fn process(&self, job: ResearchJob) {
        let job_id = job.job_id.clone();

        match self
            .engine
            .run_job(job.job_id, job.config, self.shutdown.clone())
            .await
        {
            Ok(result) => {
                self.store.put(job_id.clone(), result).await;
                tracing::info!(job_id = %job_id, "job result published");
            }
            Err(EngineError::Cancelled) => {
                tracing::warn!(job_id = %job_id, "job cancelled");
            }
            Err(error) => {
                tracing::error!(job_id = %job_id, error = %error, "job failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryJobQueue, InMemoryResultStore};
    use genomelab_artifacts::NoopArtifactStore;
    use genomelab_oracle::{FailingDesignOracle, NoopQueryRefiner, SimulatedDesignOracle};
    use genomelab_types::ResearchConfig;

    fn test_engine(oracle: Arc<dyn genomelab_oracle::DesignOracle>) -> Arc<ResearchEngine> {
        Arc::new(
            ResearchEngine::new(oracle, Arc::new(NoopQueryRefiner), Arc::new(NoopArtifactStore))
                .with_rng_seed(7),
        )
    }

    fn test_config() -> ResearchConfig {
        let mut config = ResearchConfig::new("improve checkout flow");
        config.population_size = 4;
        config.max_generations = 2;
        config.max_duration_secs = 60;
        config
    }

    async fn wait_for_result(
        store: &Arc<InMemoryResultStore>,
        job_id: &genomelab_types::JobId,
    ) -> Option<genomelab_types::ResearchResult> {
        for _ in 0..200 {
            if let Some(result) = store.get(job_id).await {
                return Some(result);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    #[tokio::test]
    async fn worker_processes_jobs_and_publishes_results() {
        let queue = Arc::new(InMemoryJobQueue::new());
        let store = Arc::new(InMemoryResultStore::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = ResearchWorker::new(
            queue.clone(),
            store.clone(),
            test_engine(Arc::new(SimulatedDesignOracle::new())),
            Duration::from_millis(10),
            shutdown_rx,
        );
        let handle = tokio::spawn(worker.run());

        let job_id = queue.submit(test_config()).await;
        let result = wait_for_result(&store, &job_id).await.expect("job result");
        assert_eq!(result.candidate_count(), 8);
        assert!(result.is_completed());

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn failed_job_is_dropped_and_worker_keeps_going() {
        let queue = Arc::new(InMemoryJobQueue::new());
        let store = Arc::new(InMemoryResultStore::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = ResearchWorker::new(
            queue.clone(),
            store.clone(),
            test_engine(Arc::new(FailingDesignOracle)),
            Duration::from_millis(10),
            shutdown_rx,
        );
        let handle = tokio::spawn(worker.run());

        let first = queue.submit(test_config()).await;
        let second = queue.submit(test_config()).await;

        // Give the worker time to chew through both jobs.
        for _ in 0..100 {
            if queue.depth().await == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(store.get(&first).await.is_none());
        assert!(store.get(&second).await.is_none());
        assert_eq!(store.count().await, 0);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_stops_an_idle_worker_promptly() {
        let queue = Arc::new(InMemoryJobQueue::new());
        let store = Arc::new(InMemoryResultStore::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = ResearchWorker::new(
            queue,
            store,
            test_engine(Arc::new(SimulatedDesignOracle::new())),
            Duration::from_secs(60),
            shutdown_rx,
        );
        let handle = tokio::spawn(worker.run());

        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("worker must stop before the poll interval elapses")
            .unwrap();
    }
}
