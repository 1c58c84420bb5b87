//! Application error taxonomy

use crate::services::llm::LlmError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required secret absent or still set to the sample value. Fatal at startup.
    #[error(
        "OpenAI API key not found. Please create a `.env` file with your key:\n\n    {var}=sk-...\n"
    )]
    MissingCredential { var: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Blank submission. Nothing is recorded and no call is made.
    #[error("Please enter a message.")]
    EmptyInput,

    #[error("Input too long ({length} characters). Please keep it under {max} characters.")]
    InputTooLong { length: usize, max: usize },

    #[error("Error calling OpenAI API: {0}")]
    ExternalCall(#[from] LlmError),

    #[error("A response is still being generated for this session. Please wait for it to finish.")]
    SessionBusy,

    #[error("Session {0} not found. Reload the page to start a new session.")]
    SessionNotFound(String),

    #[error("Unknown practice mode: {0}")]
    UnknownMode(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput | Self::InputTooLong { .. } | Self::UnknownMode(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::SessionBusy => StatusCode::CONFLICT,
            Self::ExternalCall(_) => StatusCode::BAD_GATEWAY,
            Self::MissingCredential { .. }
            | Self::Config(_)
            | Self::Template(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Errors that end a single turn but leave the session usable.
    pub fn is_turn_level(&self) -> bool {
        matches!(self, Self::InputTooLong { .. } | Self::ExternalCall(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}
