//! Health and status handler.

use crate::api::rest::state::AppState;
use crate::storage::{JobQueue, ResultStore};
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub queued_jobs: usize,
    pub stored_results: usize,
}

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        queued_jobs: state.queue.depth().await,
        stored_results: state.store.count().await,
    })
}
