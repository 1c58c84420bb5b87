use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(super::handlers::chat::index))

        // Session actions (htmx, return the chat panel)
        .route("/api/chat", post(super::handlers::api::send_message))
        .route("/api/mode", post(super::handlers::api::select_mode))
        .route("/api/role", post(super::handlers::api::set_role))
        .route("/api/temperature", post(super::handlers::api::set_temperature))
        .route("/api/clear", post(super::handlers::api::clear_history))

        // JSON
        .route("/api/session/{session_id}", get(super::handlers::api::session_snapshot))
        .route("/api/modes", get(super::handlers::api::list_modes))

        // Health check
        .route("/health", get(super::handlers::health::health_check))

        .with_state(state)
}
