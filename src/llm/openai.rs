use reqwest::Client;
use tracing::debug;

use crate::api::models::{ChatRequest, ChatResponse};
use crate::config::RelayConfig;
use crate::errors::RelayError;

/// Thin client for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Forward a chat request and deserialize the response envelope.
    ///
    /// A 401 from upstream is always surfaced as `UpstreamUnauthorized`;
    /// any other non-success status becomes `UpstreamError` carrying the
    /// code. No retries.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Upstream responded");

        if status.as_u16() == 401 {
            return Err(RelayError::UpstreamUnauthorized);
        }
        if !status.is_success() {
            return Err(RelayError::UpstreamError(status.as_u16()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| RelayError::MalformedUpstreamResponse(e.to_string()))
    }
}
