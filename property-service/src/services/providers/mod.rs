//! Text-generation provider abstraction.
//!
//! Handlers talk to a `TextProvider` trait object so the OpenAI backend can be
//! swapped for the mock in tests or when no API key is configured.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

pub use mock::MockTextProvider;
pub use openai::OpenAiTextProvider;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl ProviderError {
    /// Classify a transport failure from `reqwest`.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout(_) => AppError::TimeoutError(err.to_string()),
            other => AppError::UpstreamError(other.to_string()),
        }
    }
}

/// Generation parameters for a single completion.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
}

/// Result of a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Text of the first choice, untrimmed.
    pub text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Trait for single-turn text generation backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Model identifier reported in logs and metrics.
    fn model(&self) -> &str;

    /// Generate a completion for `prompt` sent as one user message.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError>;
}
