use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;
use crate::startup::AppState;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "property-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe.
///
/// The catalog is loaded before the listener binds, so search is always
/// available here. An unhealthy text provider only degrades the service:
/// the status stays 200 and the provider error is reported.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, text_provider) = match state.text_provider.health_check().await {
        Ok(()) => ("ready", json!({"model": state.text_provider.model(), "status": "ok"})),
        Err(e) => {
            tracing::warn!(error = %e, "Text provider health check failed");
            (
                "degraded",
                json!({
                    "model": state.text_provider.model(),
                    "status": "unavailable",
                    "error": e.to_string()
                }),
            )
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": status,
            "catalog_size": state.catalog.len(),
            "viewings": state.viewings.len().await,
            "text_provider": text_provider
        })),
    )
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
