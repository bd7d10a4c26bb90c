//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::errors::{require_field, AppError};
use crate::models::skills::SkillExtractionResult;
use crate::skills::extractor::{acknowledgement, extract_skills_from_message};
use crate::skills::suggest::{suggest, SkillSuggestions, DEFAULT_MAX_SUGGESTIONS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub message: String,
    #[serde(default)]
    pub current_skills: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    #[serde(flatten)]
    pub result: SkillExtractionResult,
    pub bot_response: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    pub query: String,
    pub max_suggestions: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Pulls skills out of a free-text message and merges them into the caller's
/// current skill list, with a short encouraging reply.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    require_field(&request.message, "message")?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let result = extract_skills_from_message(
        state.llm.as_ref(),
        &request.message,
        &request.current_skills,
        &cancel,
    )
    .await;
    let bot_response = acknowledgement(&result.extracted_skills, &mut StdRng::from_entropy());

    Ok(Json(ExtractSkillsResponse { result, bot_response }))
}

/// POST /api/v1/skills/suggest
pub async fn handle_suggest_skills(
    Json(request): Json<SuggestSkillsRequest>,
) -> Json<SkillSuggestions> {
    let max = request.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS);
    Json(suggest(&request.query, max))
}
