//! Session state and turn handling
//!
//! A `Session` owns one browser session's mode, role, temperature and
//! conversation. The system prompt is never stored: it is rendered from the
//! active mode and role each time a request is built.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::AppError;
use super::message::{Message, MessageRole};
use crate::services::llm::{ChatMessage, ChatModel, ChatReply, ChatRequest, LlmResult};
use crate::services::prompts::Mode;

/// Longest accepted user input, in characters.
pub const MAX_INPUT_LENGTH: usize = 2000;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.5;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_ROLE: &str = "Software Engineer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    AwaitingResponse,
}

/// Initial settings for new sessions.
#[derive(Debug, Clone)]
pub struct SessionDefaults {
    pub mode: Mode,
    pub role: String,
    pub temperature: f32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            role: DEFAULT_ROLE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub questions_asked: usize,
    pub total_messages: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct Session {
    pub id: String,
    mode: Mode,
    role: String,
    temperature: f32,
    messages: Vec<Message>,
    state: TurnState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), defaults)
    }

    pub fn with_id(id: impl Into<String>, defaults: &SessionDefaults) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            mode: defaults.mode,
            role: defaults.role.clone(),
            temperature: clamp_temperature(defaults.temperature).unwrap_or(DEFAULT_TEMPERATURE),
            messages: Vec::new(),
            state: TurnState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Switch practice mode. A different mode starts a fresh conversation.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::info!("[SESSION {}] Mode changed: {} -> {}", self.id, self.mode, mode);
            self.mode = mode;
            self.clear_history();
        }
    }

    /// Change the target job role. A different role starts a fresh conversation.
    pub fn set_role(&mut self, role: impl Into<String>) {
        let role = role.into();
        if self.role != role {
            tracing::info!("[SESSION {}] Role changed", self.id);
            self.role = role;
            self.clear_history();
        }
    }

    /// Clamp `temperature` into range and store it for the next turn.
    /// Non-finite values are ignored. Returns the effective temperature.
    pub fn set_temperature(&mut self, temperature: f32) -> f32 {
        match clamp_temperature(temperature) {
            Some(t) => {
                self.temperature = t;
                self.touch();
            }
            None => tracing::warn!("[SESSION {}] Ignoring non-finite temperature", self.id),
        }
        self.temperature
    }

    pub fn clear_history(&mut self) {
        self.messages.clear();
        self.touch();
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            questions_asked: self
                .messages
                .iter()
                .filter(|m| m.role == MessageRole::User)
                .count(),
            total_messages: self.messages.len(),
        }
    }

    /// System prompt for the current mode and role.
    pub fn system_prompt(&self) -> String {
        self.mode.system_prompt(&self.role)
    }

    /// Validate and record the user's text, then build the outbound request.
    ///
    /// On error nothing is appended and the session stays `Idle`. Blank text
    /// is `EmptyInput`, which callers treat as "nothing to do".
    pub fn begin_turn(&mut self, text: &str) -> Result<ChatRequest, AppError> {
        if self.state == TurnState::AwaitingResponse {
            return Err(AppError::SessionBusy);
        }

        if text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let length = text.chars().count();
        if length > MAX_INPUT_LENGTH {
            return Err(AppError::InputTooLong {
                length,
                max: MAX_INPUT_LENGTH,
            });
        }

        self.messages.push(Message::new_user(text));
        self.state = TurnState::AwaitingResponse;
        self.touch();

        let mut outbound = Vec::with_capacity(self.messages.len() + 1);
        outbound.push(ChatMessage::system(self.system_prompt()));
        outbound.extend(self.messages.iter().map(|m| ChatMessage {
            role: m.role,
            content: m.content.clone(),
        }));

        Ok(ChatRequest {
            messages: outbound,
            temperature: self.temperature,
        })
    }

    /// Apply the model result and return to `Idle`.
    ///
    /// A failed call leaves the history as it was after `begin_turn`.
    pub fn finish_turn(&mut self, result: LlmResult<ChatReply>) -> Result<&Message, AppError> {
        self.state = TurnState::Idle;
        self.touch();

        match result {
            Ok(reply) => {
                self.messages.push(Message::new_assistant(reply.content));
                Ok(&self.messages[self.messages.len() - 1])
            }
            Err(e) => {
                tracing::warn!("[SESSION {}] Model call failed: {}", self.id, e);
                Err(AppError::ExternalCall(e))
            }
        }
    }

    /// Run one complete turn against `model`.
    pub async fn submit_user_message(
        &mut self,
        text: &str,
        model: &dyn ChatModel,
    ) -> Result<&Message, AppError> {
        let request = self.begin_turn(text)?;
        tracing::info!(
            "[SESSION {}] Turn started ({} messages, mode: {})",
            self.id,
            request.messages.len(),
            self.mode.slug()
        );
        let result = model.complete(&request).await;
        self.finish_turn(result)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn clamp_temperature(t: f32) -> Option<f32> {
    t.is_finite().then(|| t.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE))
}
