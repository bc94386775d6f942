use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::time::Instant;

use crate::services::{metrics, GenerationParams, ProviderError};
use crate::startup::AppState;
use crate::utils::AppJson;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let model = state.text_provider.model().to_string();

    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        metrics::record_text_generation(&model, "rejected", None);
        return Err(AppError::ValidationError("No prompt provided".to_string()));
    };

    let params = GenerationParams {
        max_tokens: Some(state.config.openai.max_tokens),
    };

    let started = Instant::now();
    let result = state.text_provider.generate(&prompt, &params).await;
    let elapsed = started.elapsed().as_secs_f64();

    match result {
        Ok(response) => {
            metrics::record_text_generation(&model, "ok", Some(elapsed));
            tracing::info!(
                model = %model,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "Text generated"
            );

            Ok(Json(GenerateResponse {
                response: response.text.trim().to_string(),
            }))
        }
        Err(e) => {
            metrics::record_text_generation(&model, error_kind(&e), Some(elapsed));
            Err(e.into())
        }
    }
}

fn error_kind(err: &ProviderError) -> &'static str {
    match err {
        ProviderError::NotConfigured(_) => "not_configured",
        ProviderError::ApiError(_) => "api_error",
        ProviderError::RateLimited(_) => "rate_limited",
        ProviderError::MalformedResponse(_) => "malformed_response",
        ProviderError::NetworkError(_) => "network_error",
        ProviderError::Timeout(_) => "timeout",
    }
}
