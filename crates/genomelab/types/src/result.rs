//! Accumulated outcome of one research job.

use crate::candidate::DesignCandidate;
use crate::ids::JobId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a job produced: every candidate across all generations, the
/// best-so-far candidate, and references to the finalized artifacts.
///
/// The worker publishes snapshots of this into the result store; pollers only
/// ever see whole snapshots, never partial mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub job_id: JobId,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_candidate: Option<DesignCandidate>,
    /// Append-only, insertion order = generation then index.
    #[serde(default)]
    pub all_candidates: Vec<DesignCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,
}

impl ResearchResult {
    pub fn new(job_id: JobId) -> Self {
        Self {
            job_id,
            started_at: Utc::now(),
            completed_at: None,
            best_candidate: None,
            all_candidates: Vec::new(),
            bundle_path: None,
            index_path: None,
        }
    }

    /// Append a generation's candidates and refresh the best-so-far.
    ///
    /// Best-so-far is the strict maximum of overall fitness across every
    /// candidate recorded so far: ties keep the earlier-recorded candidate,
    /// and unscored candidates are never promoted.
    pub fn record_generation(&mut self, batch: Vec<DesignCandidate>) {
        for candidate in batch {
            if let Some(fitness) = candidate.fitness() {
                let current_best = self.best_candidate.as_ref().and_then(|b| b.fitness());
                if current_best.map_or(true, |best| fitness > best) {
                    self.best_candidate = Some(candidate.clone());
                }
            }
            self.all_candidates.push(candidate);
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.all_candidates.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
