//! Axum route handlers for the Guidance API.

use axum::{
    extract::{Path, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::errors::AppError;
use crate::guidance::analysis::generate_career_analysis;
use crate::guidance::mentor::{mentor_reply, ChatReply, MentorProfile};
use crate::guidance::mock_test::{generate_mock_test, get_mock_test, MockTestParams};
use crate::guidance::roadmap::generate_personalized_roadmap;
use crate::models::career::AnalysisResult;
use crate::models::mock_test::{MockTest, MockTestRecord};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub skills: String,
    pub expertise: String,
}

#[derive(Debug, Deserialize)]
pub struct MockTestRequest {
    pub skills: String,
    pub expertise: String,
    pub topic: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub skills: String,
    pub goal: String,
    pub expertise: String,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub skills: Option<String>,
    pub expertise: Option<String>,
    pub name: Option<String>,
}

/// Cancelled when the handler future is dropped, e.g. by the request timeout
/// layer, so in-flight provider calls are abandoned with it.
fn request_token() -> (CancellationToken, tokio_util::sync::DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Career paths, a 5-step roadmap, courses and certifications for the given
/// skills. Falls back to synthesized content when no provider answers.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let (cancel, _guard) = request_token();
    let mut rng = StdRng::from_entropy();
    let result = generate_career_analysis(
        state.llm.as_ref(),
        &request.skills,
        &request.expertise,
        &cancel,
        &mut rng,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/mock-test
pub async fn handle_create_mock_test(
    State(state): State<AppState>,
    Json(request): Json<MockTestRequest>,
) -> Result<Json<MockTest>, AppError> {
    let (cancel, _guard) = request_token();
    let params = MockTestParams {
        skills: &request.skills,
        expertise: &request.expertise,
        topic: request.topic.as_deref(),
        user_id: request.user_id.as_deref(),
    };
    let test = generate_mock_test(state.llm.as_ref(), state.store.as_ref(), params, &cancel).await?;

    Ok(Json(test))
}

/// GET /api/v1/mock-test/:test_id
pub async fn handle_get_mock_test(
    State(state): State<AppState>,
    Path(test_id): Path<String>,
) -> Result<Json<MockTestRecord>, AppError> {
    let record = get_mock_test(state.store.as_ref(), &test_id).await?;
    Ok(Json(record))
}

/// POST /api/v1/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let (cancel, _guard) = request_token();
    let roadmap = generate_personalized_roadmap(
        state.llm.as_ref(),
        &request.skills,
        &request.goal,
        &request.expertise,
        &cancel,
    )
    .await?;

    Ok(Json(RoadmapResponse { roadmap }))
}

/// POST /api/v1/chat
///
/// Mentor reply plus any skills the message mentions, merged into the
/// supplied skill list.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let (cancel, _guard) = request_token();
    let profile = MentorProfile {
        name: request.name,
        skills: request.skills,
        expertise: request.expertise,
    };
    let reply = mentor_reply(state.llm.as_ref(), &request.message, &profile, &cancel).await?;

    Ok(Json(reply))
}
