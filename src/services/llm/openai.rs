//! OpenAI chat-completions client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::provider::{parse_http_error, ChatModel};
use super::types::{ChatMessage, ChatReply, ChatRequest, LlmError, LlmResult};
use crate::config::Config;

/// Default OpenAI API endpoint
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model used for every turn
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Other {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> LlmResult<Self> {
        Self::new(&config.openai_api_key, &config.model, &config.openai_base_url)
    }

    fn build_request_body<'a>(&'a self, request: &'a ChatRequest) -> CompletionBody<'a> {
        CompletionBody {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
        }
    }

    fn parse_response(body: &str) -> LlmResult<ChatReply> {
        let response: OpenAIResponse =
            serde_json::from_str(body).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| ChatReply { content })
            .ok_or_else(|| LlmError::ParseError {
                message: "response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl ChatModel for OpenAIClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ChatRequest) -> LlmResult<ChatReply> {
        let started = Instant::now();
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            temperature = request.temperature,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(request))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            tracing::warn!("OpenAI returned HTTP {} after {:?}", status, started.elapsed());
            return Err(parse_http_error(status, &body_text, self.name(), &self.model));
        }

        let reply = Self::parse_response(&body_text)?;
        tracing::info!(
            "✅ Chat completion finished in {:?} ({} chars)",
            started.elapsed(),
            reply.content.len()
        );
        Ok(reply)
    }
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
