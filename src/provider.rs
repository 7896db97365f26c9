//! Provider Adapter
//!
//! Single interface over the generative-text backend. One implementation is chosen at
//! composition time from configuration (remote Anthropic Messages API or a local Ollama
//! server); the dispatcher only ever sees `Arc<dyn ProviderAdapter>`.

use crate::error::{ApiError, ProviderError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub mod anthropic;
pub mod ollama;
pub mod profile;

pub use anthropic::AnthropicClient;
pub use ollama::OllamaClient;
pub use profile::{provider_type_slug, ModelProvider, ProviderConfig, ProviderType};

/// Role-structured prompt: a system instruction and a user instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Per-action generation limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationLimits {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Advisory capability probe result. Never gates generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderStatus {
    pub fn available(model: impl Into<String>) -> Self {
        Self {
            available: true,
            model: Some(model.into()),
            error: None,
        }
    }

    pub fn unavailable(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            available: false,
            model: Some(model.into()),
            error: Some(error.into()),
        }
    }
}

/// Generative-text backend.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Send one prompt and return the raw text of the reply.
    async fn send(&self, prompt: &Prompt, limits: GenerationLimits)
        -> Result<String, ProviderError>;

    /// Advisory availability probe for display.
    async fn status(&self) -> ProviderStatus;

    fn provider_name(&self) -> &str;

    fn model_name(&self) -> &str;
}

/// Connect and request timeouts applied to every provider HTTP call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            request: Duration::from_secs(60),
        }
    }
}

pub(crate) fn build_provider_http_client(timeouts: HttpTimeouts) -> Result<Client, ApiError> {
    Client::builder()
        .no_proxy()
        .connect_timeout(timeouts.connect)
        .timeout(timeouts.request)
        .build()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

/// Map transport-level failures onto the provider error taxonomy.
pub(crate) fn map_http_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(format!("Request timeout: {}", error))
    } else if let Some(status) = error.status() {
        map_status(status, &error.to_string())
    } else if error.is_connect() {
        ProviderError::Unavailable(format!("Connection error: {}", error))
    } else if error.is_decode() || error.is_body() {
        ProviderError::InvalidResponse(format!("Failed to read response: {}", error))
    } else {
        ProviderError::Unavailable(format!("HTTP error: {}", error))
    }
}

/// Map a non-success HTTP status onto the provider error taxonomy.
pub(crate) fn map_status(status: StatusCode, body: &str) -> ProviderError {
    match status.as_u16() {
        429 => ProviderError::RateLimited(format!("Rate limit exceeded: {}", body)),
        408 | 504 => ProviderError::Timeout(format!("Upstream timeout ({}): {}", status, body)),
        401 | 403 => ProviderError::Unavailable(format!("Authentication failed: {}", body)),
        404 => ProviderError::Unavailable(format!("Model or endpoint not found: {}", body)),
        _ => ProviderError::Unavailable(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

/// Builds the configured adapter once, at composition time.
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_adapter(config: &ProviderConfig) -> Result<Arc<dyn ProviderAdapter>, ApiError> {
        let provider = config.to_model_provider()?;
        Self::create_from_model_provider(&provider, config.http_timeouts())
    }

    pub fn create_from_model_provider(
        provider: &ModelProvider,
        timeouts: HttpTimeouts,
    ) -> Result<Arc<dyn ProviderAdapter>, ApiError> {
        match provider {
            ModelProvider::Anthropic {
                model,
                api_key,
                base_url,
            } => Ok(Arc::new(AnthropicClient::new(
                model.clone(),
                api_key.clone(),
                base_url.clone(),
                timeouts,
            )?)),
            ModelProvider::Ollama { model, base_url } => Ok(Arc::new(OllamaClient::new(
                model.clone(),
                base_url.clone(),
                timeouts,
            )?)),
        }
    }
}
