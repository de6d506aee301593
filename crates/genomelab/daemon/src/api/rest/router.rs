//! API router configuration.

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router.
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/research/start", post(handlers::start_research))
        .route("/research/:job_id", get(handlers::get_research));

    let router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
