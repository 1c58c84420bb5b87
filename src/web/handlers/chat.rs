use crate::services::template::ChatView;
use crate::state::AppState;
use crate::types::AppError;
use axum::{extract::State, response::Html};

/// Start a new session and render the full chat page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (_, handle) = state.sessions.write().await.create_session();
    let session = handle.lock().await;

    let html = state
        .templates
        .render_chat_page(&ChatView::from_session(&session))?;
    Ok(Html(html))
}
