//! In-memory storage implementations.

use super::traits::{JobQueue, ResultStore};
use async_trait::async_trait;
use genomelab_types::{JobId, ResearchConfig, ResearchJob, ResearchResult};
use std::collections::{HashMap, VecDeque};
use tokio::sync::{Mutex, RwLock};

/// FIFO queue for submitted jobs; concurrent submitters, single consumer.
#[derive(Debug, Default)]
pub struct InMemoryJobQueue {
    jobs: Mutex<VecDeque<ResearchJob>>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn submit(&self, config: ResearchConfig) -> JobId {
        let job_id = JobId::generate();
        let mut jobs = self.jobs.lock().await;
        jobs.push_back(ResearchJob::new(job_id.clone(), config));
        job_id
    }

    async fn dequeue(&self) -> Option<ResearchJob> {
        let mut jobs = self.jobs.lock().await;
        jobs.pop_front()
    }

    async fn depth(&self) -> usize {
        let jobs = self.jobs.lock().await;
        jobs.len()
    }
}

/// Concurrent map from job identifier to the latest published result.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: RwLock<HashMap<JobId, ResearchResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn get(&self, job_id: &JobId) -> Option<ResearchResult> {
        let results = self.results.read().await;
        results.get(job_id).cloned()
    }

    async fn put(&self, job_id: JobId, result: ResearchResult) {
        let mut results = self.results.write().await;
        results.insert(job_id, result);
    }

    async fn count(&self) -> usize {
        let results = self.results.read().await;
        results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn test_config() -> ResearchConfig {
        ResearchConfig::new("improve checkout flow")
    }

    #[tokio::test]
    async fn submit_returns_unique_ids_in_fifo_order() {
        let queue = InMemoryJobQueue::new();

        let first = queue.submit(test_config()).await;
        let second = queue.submit(test_config()).await;
        assert_ne!(first, second);

        assert_eq!(queue.dequeue().await.unwrap().job_id, first);
        assert_eq!(queue.dequeue().await.unwrap().job_id, second);
        assert!(queue.dequeue().await.is_none());
    }

    #[tokio::test]
    async fn concurrent_submissions_never_collide() {
        let queue = Arc::new(InMemoryJobQueue::new());

        let submissions = (0..50).map(|_| {
            let queue = queue.clone();
            tokio::spawn(async move { queue.submit(test_config()).await })
        });
        let ids: Vec<JobId> = join_all(submissions)
            .await
            .into_iter()
            .map(|handle| handle.unwrap())
            .collect();

        let unique: HashSet<_> = ids.iter().cloned().collect();
        assert_eq!(unique.len(), 50);
        assert_eq!(queue.depth().await, 50);

        // Every submitted job appears exactly once.
        let mut drained = HashSet::new();
        while let Some(job) = queue.dequeue().await {
            assert!(drained.insert(job.job_id));
        }
        assert_eq!(drained.len(), 50);
    }

    #[tokio::test]
    async fn store_get_is_none_until_put() {
        let store = InMemoryResultStore::new();
        let job_id = JobId::generate();
        assert!(store.get(&job_id).await.is_none());

        store
            .put(job_id.clone(), ResearchResult::new(job_id.clone()))
            .await;
        assert!(store.get(&job_id).await.is_some());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn put_overwrites_prior_snapshot() {
        let store = InMemoryResultStore::new();
        let job_id = JobId::generate();

        store
            .put(job_id.clone(), ResearchResult::new(job_id.clone()))
            .await;
        let mut updated = ResearchResult::new(job_id.clone());
        updated.completed_at = Some(chrono::Utc::now());
        store.put(job_id.clone(), updated).await;

        assert!(store.get(&job_id).await.unwrap().is_completed());
        assert_eq!(store.count().await, 1);
    }
}
