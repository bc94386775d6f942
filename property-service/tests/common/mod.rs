#![allow(dead_code)]

use property_service::config::{
    CatalogConfig, OpenAiConfig, OutboundConfig, PropertyConfig, SinkConfig,
};
use property_service::services::{
    CatalogStore, LeadIntake, LeadSink, MockLeadSink, MockTextProvider, TextProvider,
    ViewingRegister,
};
use property_service::startup::{AppState, Application};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub fn fixture_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/properties.json")
}

/// Configuration pointing every outbound URL at `upstream`.
pub fn test_config(upstream: &str) -> PropertyConfig {
    PropertyConfig {
        common: CoreConfig { port: 0 },
        catalog: CatalogConfig {
            path: fixture_catalog_path(),
        },
        openai: OpenAiConfig {
            api_key: Secret::new("sk-test".to_string()),
            model: "gpt-4".to_string(),
            base_url: format!("{}/v1", upstream),
            max_tokens: 50,
        },
        sinks: SinkConfig {
            make_webhook_url: format!("{}/make-hook", upstream),
            airtable_url: format!("{}/airtable", upstream),
            airtable_api_key: Secret::new("airtable-key".to_string()),
        },
        http: OutboundConfig {
            timeout: Duration::from_secs(5),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub viewings: ViewingRegister,
    pub catalog: CatalogStore,
}

/// Test doubles injected into a spawned app.
pub struct Doubles {
    pub text_provider: Arc<MockTextProvider>,
    pub webhook: Arc<MockLeadSink>,
    pub records: Arc<MockLeadSink>,
}

impl Default for Doubles {
    fn default() -> Self {
        Self {
            text_provider: Arc::new(MockTextProvider::new(true)),
            webhook: Arc::new(MockLeadSink::responding("make", 200, "Accepted")),
            records: Arc::new(MockLeadSink::responding(
                "airtable",
                200,
                r#"{"id":"rec123","fields":{}}"#,
            )),
        }
    }
}

impl TestApp {
    /// Spawn with the fixture catalog and mock collaborators.
    pub async fn spawn(doubles: &Doubles) -> Self {
        let config = test_config("http://127.0.0.1:1");
        let catalog =
            CatalogStore::load(&config.catalog.path).expect("Failed to load fixture catalog");

        let text_provider: Arc<dyn TextProvider> = doubles.text_provider.clone();
        let webhook: Arc<dyn LeadSink> = doubles.webhook.clone();
        let records: Arc<dyn LeadSink> = doubles.records.clone();

        let state = AppState {
            config,
            catalog,
            viewings: ViewingRegister::new(),
            text_provider,
            lead_intake: LeadIntake::new(webhook, records),
        };

        let app = Application::build_with_state(state)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    /// Spawn through the production wiring, with real HTTP clients aimed at `config`.
    pub async fn spawn_with_config(config: PropertyConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let viewings = app.state().viewings.clone();
        let catalog = app.state().catalog.clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let address = format!("http://127.0.0.1:{}", port);
        let client = reqwest::Client::new();

        // Wait for the server to be ready by polling health endpoint
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            client,
            viewings,
            catalog,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
