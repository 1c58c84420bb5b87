//! Template rendering service

pub mod chat;
pub mod engine;
pub mod markdown;

pub use chat::ChatView;
pub use engine::TemplateEngine;
