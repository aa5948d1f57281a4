//! Vision inference HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{VisionError, VisionResult};
use crate::transcript::Transcript;
use crate::types::{ChatRequest, ChatResponse};

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default vision model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4-vision-preview";

/// Configuration for the vision client.
#[derive(Debug, Clone)]
pub struct VisionClientConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Bearer token for the endpoint
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Output token cap per call
    pub max_tokens: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl VisionClientConfig {
    /// Create a config with default endpoint, model and limits.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 300,
            timeout: Duration::from_secs(120),
        }
    }

    /// Create config from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `ISPY_VISION_ENDPOINT`,
    /// `ISPY_VISION_MODEL`, `ISPY_VISION_MAX_TOKENS` and
    /// `ISPY_VISION_TIMEOUT` (seconds) override the defaults.
    pub fn from_env() -> VisionResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| VisionError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var("ISPY_VISION_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("ISPY_VISION_MODEL") {
            config.model = model;
        }
        if let Some(max_tokens) = std::env::var("ISPY_VISION_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.max_tokens = max_tokens;
        }
        if let Some(secs) = std::env::var("ISPY_VISION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Client for the vision inference endpoint.
pub struct VisionClient {
    http: Client,
    config: VisionClientConfig,
}

impl VisionClient {
    /// Create a new vision client.
    pub fn new(config: VisionClientConfig) -> VisionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(VisionError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> VisionResult<Self> {
        Self::new(VisionClientConfig::from_env()?)
    }

    /// Submit the full transcript and return the top reply's text.
    ///
    /// There is no retry or backoff; the first failure propagates.
    pub async fn complete(&self, transcript: &Transcript) -> VisionResult<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: transcript.messages().to_vec(),
            max_tokens: self.config.max_tokens,
        };

        debug!(
            messages = transcript.len(),
            model = %self.config.model,
            "Submitting transcript to {}",
            self.config.endpoint
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(VisionError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::RequestFailed(format!(
                "inference endpoint returned {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(VisionError::EmptyResponse)?;

        debug!(chars = reply.len(), "Received inference reply");
        Ok(reply)
    }
}
