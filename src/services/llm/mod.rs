//! Chat-completion model clients
//!
//! `ChatModel` is the seam between the session controller and the hosted
//! model API. `OpenAIClient` is the production implementation.

pub mod openai;
pub mod provider;
pub mod types;

pub use openai::OpenAIClient;
pub use provider::{parse_http_error, ChatModel};
pub use types::{ChatMessage, ChatReply, ChatRequest, LlmError, LlmResult};
