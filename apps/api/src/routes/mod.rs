pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers as guidance;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Guidance API
        .route("/api/v1/analyze", post(guidance::handle_analyze))
        .route("/api/v1/mock-test", post(guidance::handle_create_mock_test))
        .route(
            "/api/v1/mock-test/:test_id",
            get(guidance::handle_get_mock_test),
        )
        .route("/api/v1/roadmap", post(guidance::handle_roadmap))
        .route("/api/v1/chat", post(guidance::handle_chat))
        // Skills API
        .route("/api/v1/skills/extract", post(skills::handle_extract_skills))
        .route("/api/v1/skills/suggest", post(skills::handle_suggest_skills))
        .with_state(state)
}
