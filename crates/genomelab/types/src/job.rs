//! Queue entry pairing a job identifier with its immutable configuration.

use crate::config::ResearchConfig;
use crate::ids::JobId;
use serde::{Deserialize, Serialize};

/// One submitted research job awaiting the worker.
///
/// Created at submission and consumed exactly once; after dequeue its
/// lifecycle continues as a [`crate::ResearchResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchJob {
    pub job_id: JobId,
    pub config: ResearchConfig,
}

impl ResearchJob {
    pub fn new(job_id: JobId, config: ResearchConfig) -> Self {
        Self { job_id, config }
    }
}
