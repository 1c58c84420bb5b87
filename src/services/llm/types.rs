use crate::types::MessageRole;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire form of one message: only role and content reach the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Outbound request for one turn. The model identifier is supplied by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == MessageRole::System)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
}

pub type LlmResult<T> = Result<T, LlmError>;

/// Failures reported by a model client.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("rate limited: {message}")]
    RateLimited { message: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    #[error("server error ({}): {message}", status_label(.status))]
    ServerError { message: String, status: Option<u16> },

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("failed to parse response: {message}")]
    ParseError { message: String },

    #[error("{message}")]
    Other { message: String },
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {}", code),
        None => "no status".to_string(),
    }
}
