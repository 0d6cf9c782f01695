use crate::errors::RelayError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Immutable process configuration, built once at startup and handed to
/// the request-handling components.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
}

impl RelayConfig {
    /// Read configuration from the process environment. The API key is
    /// required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| RelayError::Config("OPENAI_API_KEY not set".into()))?;
        if api_key.is_empty() {
            return Err(RelayError::Config("OPENAI_API_KEY is empty".into()));
        }

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let default_model = std::env::var("RELAY_DEFAULT_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            default_model,
        })
    }
}
