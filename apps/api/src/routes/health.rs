use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Compass career guidance API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Service status plus which text-generation providers are configured.
/// Provider outages never make the service unhealthy.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "compass-api",
        "providers": state.llm.provider_statuses()
    }))
}
