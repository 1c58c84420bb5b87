//! Model client trait
//!
//! Defines the interface the session controller uses to reach a hosted
//! chat-completion model.

use async_trait::async_trait;

use super::types::{ChatReply, ChatRequest, LlmError, LlmResult};

/// Trait that all chat model clients must implement.
///
/// One call per turn: no streaming, no retries, no timeout. Whatever the
/// remote side does is reported back as a single success or `LlmError`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the model identifier sent with every request.
    fn model(&self) -> &str;

    /// Send the full message list and return the assistant reply.
    async fn complete(&self, request: &ChatRequest) -> LlmResult<ChatReply>;
}

/// Map an HTTP error status and body to an `LlmError`.
///
/// `model` is the configured model id, reported when the endpoint answers 404.
pub fn parse_http_error(status: u16, body: &str, provider: &str, model: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: model.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
