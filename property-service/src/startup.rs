//! Application startup and lifecycle management.

use crate::config::PropertyConfig;
use crate::handlers::{
    capture_lead, echo, generate, health_check, index, metrics_endpoint, readiness_check,
    schedule_viewing, search_properties,
};
use crate::services::{
    AirtableSink, CatalogStore, LeadIntake, MockTextProvider, OpenAiTextProvider, TextProvider,
    ViewingRegister, WebhookSink,
};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::middleware::{make_request_span, request_id_middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: PropertyConfig,
    pub catalog: CatalogStore,
    pub viewings: ViewingRegister,
    pub text_provider: Arc<dyn TextProvider>,
    pub lead_intake: LeadIntake,
}

impl AppState {
    /// Load the catalog and wire real collaborators from configuration.
    ///
    /// Fails when the catalog cannot be read or the HTTP client cannot be built.
    pub fn from_config(config: PropertyConfig) -> Result<Self, AppError> {
        let catalog = CatalogStore::load(&config.catalog.path).map_err(|e| {
            tracing::error!("Failed to load property catalog: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.http.timeout)
            .build()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("HTTP client error: {}", e)))?;

        let text_provider: Arc<dyn TextProvider> =
            if config.openai.api_key.expose_secret().is_empty() {
                tracing::warn!("OPENAI_API_KEY not set, text generation is disabled");
                Arc::new(MockTextProvider::new(false))
            } else {
                tracing::info!(model = %config.openai.model, "Initialized OpenAI text provider");
                Arc::new(OpenAiTextProvider::new(config.openai.clone(), client.clone()))
            };

        let lead_intake = LeadIntake::new(
            Arc::new(WebhookSink::new(
                config.sinks.make_webhook_url.clone(),
                client.clone(),
            )),
            Arc::new(AirtableSink::new(
                config.sinks.airtable_url.clone(),
                config.sinks.airtable_api_key.clone(),
                client,
            )),
        );

        Ok(Self {
            config,
            catalog,
            viewings: ViewingRegister::new(),
            text_provider,
            lead_intake,
        })
    }
}

/// All routes with their middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/test", post(echo))
        .route("/generate", post(generate))
        .route("/search_properties", post(search_properties))
        .route("/schedule_viewing", post(schedule_viewing))
        .route("/capture_lead", post(capture_lead))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with collaborators derived from `config`.
    pub async fn build(config: PropertyConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(config)?;
        Self::build_with_state(state).await
    }

    /// Build the application around an already assembled state.
    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        // port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            catalog_size = state.catalog.len(),
            "Property service listening"
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until the process is stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
