use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message role in conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// One entry of a session's conversation. Never edited once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn new_user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn new_assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Form body for `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ModeForm {
    pub session_id: String,
    pub mode: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleForm {
    pub session_id: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct TemperatureForm {
    pub session_id: String,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct SessionForm {
    pub session_id: String,
}
