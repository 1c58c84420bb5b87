use crate::config::Config;
use crate::services::llm::ChatModel;
use crate::services::template::TemplateEngine;
use crate::services::SessionManager;
use crate::types::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn ChatModel>,
    pub sessions: Arc<RwLock<SessionManager>>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn ChatModel>) -> Result<Self, AppError> {
        tracing::info!("[STATE] Initializing AppState...");
        tracing::info!("[STATE]   Model: {} via {}", model.model(), model.name());
        tracing::info!("[STATE]   Max sessions: {}", config.max_sessions);

        let sessions = SessionManager::new(config.session_defaults(), config.max_sessions);
        let templates = TemplateEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            model,
            sessions: Arc::new(RwLock::new(sessions)),
            templates: Arc::new(templates),
        })
    }
}
