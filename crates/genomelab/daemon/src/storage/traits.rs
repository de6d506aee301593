//! Storage trait definitions.
//!
//! Both collections are owned by the composition root and handed to the
//! worker and the request handlers as explicit `Arc` handles; there are no
//! ambient singletons. Each collection serializes its own access, so callers
//! never take external locks.

use async_trait::async_trait;
use genomelab_types::{JobId, ResearchConfig, ResearchJob, ResearchResult};

/// FIFO buffer of submitted jobs awaiting the worker.
///
/// Unbounded by design; backpressure is explicitly out of scope.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue a new job and hand back its freshly generated identifier.
    /// Non-blocking; a well-formed config cannot be rejected here.
    async fn submit(&self, config: ResearchConfig) -> JobId;

    /// Remove and return the oldest job not yet taken, if any.
    async fn dequeue(&self) -> Option<ResearchJob>;

    /// Number of jobs currently waiting.
    async fn depth(&self) -> usize;
}

/// Map from job identifier to its published outcome.
///
/// An absent entry means "unknown or still pending" — pollers cannot tell a
/// never-submitted id from an in-progress or abandoned job. That ambiguity is
/// deliberate and preserved.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Latest published snapshot for a job, if any.
    async fn get(&self, job_id: &JobId) -> Option<ResearchResult>;

    /// Publish a snapshot, replacing any prior one. Last writer wins; only
    /// the worker calls this, one job at a time.
    async fn put(&self, job_id: JobId, result: ResearchResult);

    /// Number of stored results.
    async fn count(&self) -> usize;
}
