use anyhow::Result;
use interview_practice::{web, AppState, Config, OpenAIClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the process environment may carry the key.
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_practice=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Interview Practice");

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    // Initialize model client
    let model = Arc::new(OpenAIClient::from_config(&config)?);

    // Create application state
    let app_state = AppState::new(config, model)?;

    // Start web server
    web::start_server(app_state).await?;

    Ok(())
}
