use crate::services::llm::openai::{DEFAULT_MODEL, OPENAI_API_URL};
use crate::types::session::{SessionDefaults, DEFAULT_ROLE, DEFAULT_TEMPERATURE};
use crate::types::AppError;
use std::env;

/// Environment variable holding the model API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Sample value shipped in `.env.example`; treated the same as a missing key.
const PLACEHOLDER_API_KEY: &str = "your-key-here";

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,
    pub static_dir: String,

    // Model API
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,

    // Session defaults
    pub default_role: String,
    pub default_temperature: f32,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
            .ok_or(AppError::MissingCredential { var: API_KEY_VAR })?;

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", lookup("PORT"), 3000)?,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "src/web/static".to_string()),

            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_API_URL.to_string()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),

            default_role: lookup("DEFAULT_ROLE").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            default_temperature: parse_or("DEFAULT_TEMPERATURE", lookup("DEFAULT_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_sessions: parse_or("MAX_SESSIONS", lookup("MAX_SESSIONS"), 100)?,
        })
    }

    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            role: self.default_role.clone(),
            temperature: self.default_temperature,
            ..SessionDefaults::default()
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}
