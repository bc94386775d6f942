use super::{read_response, LeadSink, SinkError, SinkResponse};
use crate::models::Lead;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use service_core::observability::TracedRequestExt;

/// Tabular record service: the lead becomes one row under `fields`.
pub struct AirtableSink {
    url: String,
    api_key: Secret<String>,
    client: Client,
}

#[derive(Serialize)]
struct CreateRecord<'a> {
    fields: &'a Lead,
}

impl AirtableSink {
    pub fn new(url: impl Into<String>, api_key: Secret<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            api_key,
            client,
        }
    }
}

#[async_trait]
impl LeadSink for AirtableSink {
    fn name(&self) -> &'static str {
        "airtable"
    }

    async fn deliver(&self, lead: &Lead) -> Result<SinkResponse, SinkError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&CreateRecord { fields: lead })
            .with_trace_context()
            .send()
            .await
            .map_err(|e| SinkError::from_transport(self.name(), e))?;

        read_response(self.name(), response).await
    }
}
