//! Persistence of rendered artifacts under a per-job directory.

use crate::error::ArtifactError;
use crate::render::{render_html, render_index};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use genomelab_types::{CandidateId, DesignCandidate, JobId, ResearchResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

const BUNDLE_FILE: &str = "research-bundle.json";
const INDEX_FILE: &str = "index.html";

/// Persists candidate demos, the structured bundle and the index view.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write one candidate's HTML demo, returning its path.
    async fn write_candidate(
        &self,
        job_id: &JobId,
        candidate: &DesignCandidate,
    ) -> Result<PathBuf, ArtifactError>;

    /// Write the structured JSON bundle for a finished job.
    async fn write_bundle(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError>;

    /// Write the human-browsable index page for a finished job.
    async fn write_index(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError>;
}

/// Structured summary persisted as `research-bundle.json`.
#[derive(Debug, Serialize)]
struct BundleDocument<'a> {
    job_id: &'a JobId,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    best_candidate_id: Option<&'a CandidateId>,
    candidates: &'a [DesignCandidate],
}

/// Filesystem-backed store; one directory per job under a configurable root.
pub struct FsArtifactStore {
    output_root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    fn job_dir(&self, job_id: &JobId) -> PathBuf {
        self.output_root.join(job_id.as_str())
    }

    async fn write_file(path: &Path, contents: &str) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        Ok(())
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn write_candidate(
        &self,
        job_id: &JobId,
        candidate: &DesignCandidate,
    ) -> Result<PathBuf, ArtifactError> {
        let path = self
            .job_dir(job_id)
            .join(format!("{}.html", candidate.id));
        Self::write_file(&path, &render_html(candidate)).await?;
        Ok(path)
    }

    async fn write_bundle(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError> {
        let document = BundleDocument {
            job_id: &result.job_id,
            started_at: result.started_at,
            completed_at: result.completed_at,
            best_candidate_id: result.best_candidate.as_ref().map(|c| &c.id),
            candidates: &result.all_candidates,
        };
        let json = serde_json::to_string_pretty(&document)?;

        let path = self.job_dir(&result.job_id).join(BUNDLE_FILE);
        Self::write_file(&path, &json).await?;
        tracing::debug!(job_id = %result.job_id, path = %path.display(), "wrote research bundle");
        Ok(path)
    }

    async fn write_index(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError> {
        let path = self.job_dir(&result.job_id).join(INDEX_FILE);
        Self::write_file(&path, &render_index(result)).await?;
        Ok(path)
    }
}

/// Store that renders nothing and touches no disk; returns the paths the
/// filesystem store would have used. For tests and dry runs.
pub struct NoopArtifactStore;

#[async_trait]
impl ArtifactStore for NoopArtifactStore {
    async fn write_candidate(
        &self,
        job_id: &JobId,
        candidate: &DesignCandidate,
    ) -> Result<PathBuf, ArtifactError> {
        Ok(PathBuf::from(job_id.as_str()).join(format!("{}.html", candidate.id)))
    }

    async fn write_bundle(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError> {
        Ok(PathBuf::from(result.job_id.as_str()).join(BUNDLE_FILE))
    }

    async fn write_index(&self, result: &ResearchResult) -> Result<PathBuf, ArtifactError> {
        Ok(PathBuf::from(result.job_id.as_str()).join(INDEX_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genomelab_types::{DesignSpec, ScoreCard};
    use uuid::Uuid;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("genomelab-artifacts-{}", Uuid::new_v4()))
    }

    fn scored_candidate(index: usize) -> DesignCandidate {
        DesignCandidate::new(
            CandidateId::new(0, index),
            format!("Concept {}", index),
            "test candidate",
            DesignSpec::default(),
        )
        .with_scores(ScoreCard {
            usability: 5.0,
            accessibility: 5.0,
            visual_clarity: 5.0,
            implementation_complexity: 1.0,
            overall_fitness: 3.8,
            rationale: None,
        })
    }

    #[tokio::test]
    async fn writes_candidate_demo_under_job_dir() {
        let root = temp_root();
        let store = FsArtifactStore::new(&root);
        let job_id = JobId::new("job1");

        let path = store
            .write_candidate(&job_id, &scored_candidate(0))
            .await
            .unwrap();

        assert_eq!(path, root.join("job1").join("gen0-cand000.html"));
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("Concept 0"));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn bundle_records_best_candidate_and_all_entries() {
        let root = temp_root();
        let store = FsArtifactStore::new(&root);

        let mut result = ResearchResult::new(JobId::new("job2"));
        result.record_generation(vec![scored_candidate(0), scored_candidate(1)]);
        result.completed_at = Some(Utc::now());

        let path = store.write_bundle(&result).await.unwrap();
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed["job_id"], "job2");
        assert_eq!(parsed["best_candidate_id"], "gen0-cand000");
        assert_eq!(parsed["candidates"].as_array().unwrap().len(), 2);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn index_page_lists_every_candidate() {
        let root = temp_root();
        let store = FsArtifactStore::new(&root);

        let mut result = ResearchResult::new(JobId::new("job3"));
        result.record_generation(vec![scored_candidate(0), scored_candidate(1)]);

        let path = store.write_index(&result).await.unwrap();
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("gen0-cand000.html"));
        assert!(contents.contains("gen0-cand001.html"));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn noop_store_reports_paths_without_touching_disk() {
        let store = NoopArtifactStore;
        let job_id = JobId::new("job4");
        let path = store
            .write_candidate(&job_id, &scored_candidate(0))
            .await
            .unwrap();
        assert_eq!(path, PathBuf::from("job4").join("gen0-cand000.html"));
        assert!(!path.exists());
    }
}
