//! Health check endpoint

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let sessions = state.sessions.read().await.count();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "interview-practice",
            "version": env!("CARGO_PKG_VERSION"),
            "model": state.model.model(),
            "sessions": sessions,
        })),
    )
}
