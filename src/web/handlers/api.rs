//! API endpoint handlers
//!
//! Form endpoints are driven by htmx and answer with the re-rendered chat
//! panel. Turn-level failures are shown inline in that panel; anything else
//! becomes an error response.

use crate::services::llm::{ChatModel, LlmError};
use crate::services::prompts::Mode;
use crate::services::template::ChatView;
use crate::state::AppState;
use crate::types::{
    AppError, ChatForm, ModeForm, RoleForm, Session, SessionForm, TemperatureForm,
};
use axum::{
    extract::{Form, Path, State},
    response::{Html, Json},
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;

/// Look up a session and take its lock without waiting.
///
/// A session that is still waiting on the model is reported as busy rather
/// than queued behind the in-flight turn.
async fn lock_session(state: &AppState, session_id: &str) -> Result<OwnedMutexGuard<Session>, AppError> {
    let handle = state.sessions.write().await.require(session_id)?;
    handle.try_lock_owned().map_err(|_| AppError::SessionBusy)
}

fn render_panel(state: &AppState, view: ChatView) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render_panel(&view)?))
}

/// Run one turn while holding the session lock.
///
/// The model call gets its own task. If that task dies, the turn is closed as
/// a failed call so the session is back to `Idle` either way.
async fn run_turn(
    mut session: OwnedMutexGuard<Session>,
    model: Arc<dyn ChatModel>,
    text: String,
) -> (OwnedMutexGuard<Session>, Result<(), AppError>) {
    let request = match session.begin_turn(&text) {
        Ok(request) => request,
        Err(e) => return (session, Err(e)),
    };
    tracing::info!(
        "[SESSION {}] Turn started ({} messages, mode: {})",
        session.id,
        request.messages.len(),
        session.mode().slug()
    );

    let result = match tokio::spawn(async move { model.complete(&request).await }).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("[SESSION {}] Model task failed: {}", session.id, e);
            Err(LlmError::Other {
                message: "the model client stopped unexpectedly".to_string(),
            })
        }
    };

    let outcome = session.finish_turn(result).map(|_| ());
    (session, outcome)
}

/// Handle chat message submission: one full turn against the model.
pub async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, AppError> {
    let session = lock_session(&state, &form.session_id).await?;
    tracing::info!(
        "Received message ({} chars) for session: {}",
        form.message.chars().count(),
        form.session_id
    );

    // The turn runs on its own task so it finishes even if the client goes away.
    let (session, outcome) = tokio::spawn(run_turn(session, state.model.clone(), form.message))
        .await
        .map_err(|e| AppError::Internal(format!("turn task failed: {}", e)))?;

    let view = ChatView::from_session(&session);
    match outcome {
        Ok(()) | Err(AppError::EmptyInput) => render_panel(&state, view),
        Err(e) if e.is_turn_level() => render_panel(&state, view.with_notice(e.to_string())),
        Err(e) => Err(e),
    }
}

pub async fn select_mode(
    State(state): State<AppState>,
    Form(form): Form<ModeForm>,
) -> Result<Html<String>, AppError> {
    let mode: Mode = form.mode.parse()?;
    let mut session = lock_session(&state, &form.session_id).await?;
    session.select_mode(mode);
    render_panel(&state, ChatView::from_session(&session))
}

pub async fn set_role(
    State(state): State<AppState>,
    Form(form): Form<RoleForm>,
) -> Result<Html<String>, AppError> {
    let mut session = lock_session(&state, &form.session_id).await?;
    session.set_role(form.role);
    render_panel(&state, ChatView::from_session(&session))
}

pub async fn set_temperature(
    State(state): State<AppState>,
    Form(form): Form<TemperatureForm>,
) -> Result<Html<String>, AppError> {
    let mut session = lock_session(&state, &form.session_id).await?;
    let effective = session.set_temperature(form.temperature);
    tracing::debug!("Temperature for session {} set to {}", form.session_id, effective);
    render_panel(&state, ChatView::from_session(&session))
}

pub async fn clear_history(
    State(state): State<AppState>,
    Form(form): Form<SessionForm>,
) -> Result<Html<String>, AppError> {
    let mut session = lock_session(&state, &form.session_id).await?;
    session.clear_history();
    tracing::info!("Chat cleared for session: {}", form.session_id);
    render_panel(&state, ChatView::from_session(&session))
}

/// JSON view of one session.
pub async fn session_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, AppError> {
    let session = lock_session(&state, &session_id).await?;
    Ok(Json(session.clone()))
}

#[derive(Debug, Serialize)]
pub struct ModeSummary {
    slug: &'static str,
    label: &'static str,
    icon: &'static str,
    description: &'static str,
}

pub async fn list_modes() -> Json<Vec<ModeSummary>> {
    Json(
        Mode::ALL
            .into_iter()
            .map(|mode| {
                let profile = mode.profile();
                ModeSummary {
                    slug: profile.slug,
                    label: profile.label,
                    icon: profile.icon,
                    description: profile.description,
                }
            })
            .collect(),
    )
}
