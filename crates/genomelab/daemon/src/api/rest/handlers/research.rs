//! Research job submission and polling handlers.

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::storage::{JobQueue, ResultStore};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use genomelab_types::{CandidateId, JobId, ResearchConfig};
use serde::Serialize;
use std::path::PathBuf;

/// Response for a newly accepted research job.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResearchResponse {
    pub job_id: JobId,
}

/// Accept a research config, validate it, and enqueue a job.
///
/// A malformed config is rejected here and never enters the queue.
pub async fn start_research(
    State(state): State<AppState>,
    Json(config): Json<ResearchConfig>,
) -> ApiResult<Json<StartResearchResponse>> {
    config.validate().map_err(ApiError::BadRequest)?;

    let job_id = state.queue.submit(config).await;
    tracing::info!(job_id = %job_id, "enqueued research job");

    Ok(Json(StartResearchResponse { job_id }))
}

/// Summary of a completed research job.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStatusResponse {
    pub job_id: JobId,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub best_candidate_id: Option<CandidateId>,
    pub bundle_path: Option<PathBuf>,
    pub index_html_path: Option<PathBuf>,
    pub candidate_count: usize,
}

/// Shape returned while a job has no stored result. A pending job, a failed
/// job and a never-submitted id all look the same here — by design.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingResponse {
    pub job_id: String,
    pub status: String,
}

/// Poll a job by identifier.
pub async fn get_research(State(state): State<AppState>, Path(job_id): Path<String>) -> Response {
    let id = JobId::new(job_id.clone());

    match state.store.get(&id).await {
        Some(result) => (
            StatusCode::OK,
            Json(ResearchStatusResponse {
                job_id: result.job_id.clone(),
                started_at: result.started_at,
                completed_at: result.completed_at,
                best_candidate_id: result.best_candidate.as_ref().map(|c| c.id.clone()),
                bundle_path: result.bundle_path.clone(),
                index_html_path: result.index_path.clone(),
                candidate_count: result.candidate_count(),
            }),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(PendingResponse {
                job_id,
                status: "pending".to_string(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryJobQueue, InMemoryResultStore};
    use genomelab_types::ResearchResult;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryJobQueue::new()),
            Arc::new(InMemoryResultStore::new()),
        )
    }

    #[tokio::test]
    async fn valid_config_is_enqueued() {
        let state = test_state();
        let config = ResearchConfig::new("improve checkout flow");

        let response = start_research(State(state.clone()), Json(config))
            .await
            .unwrap();
        assert_eq!(response.0.job_id.as_str().len(), 32);
        assert_eq!(state.queue.depth().await, 1);
    }

    #[tokio::test]
    async fn malformed_config_never_enters_the_queue() {
        let state = test_state();
        let config = ResearchConfig::new("   ");

        let result = start_research(State(state.clone()), Json(config)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        assert_eq!(state.queue.depth().await, 0);
    }

    #[tokio::test]
    async fn unknown_id_polls_as_pending() {
        let state = test_state();
        let response = get_research(State(state), Path("no-such-job".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn stored_result_polls_as_ok() {
        let state = test_state();
        let job_id = JobId::generate();
        let mut result = ResearchResult::new(job_id.clone());
        result.completed_at = Some(Utc::now());
        state.store.put(job_id.clone(), result).await;

        let response = get_research(State(state), Path(job_id.to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
