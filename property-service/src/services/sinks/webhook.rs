use super::{read_response, LeadSink, SinkError, SinkResponse};
use crate::models::Lead;
use async_trait::async_trait;
use reqwest::Client;
use service_core::observability::TracedRequestExt;

/// Generic automation webhook: the lead is posted as a flat JSON object.
pub struct WebhookSink {
    url: String,
    client: Client,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    fn name(&self) -> &'static str {
        "make"
    }

    async fn deliver(&self, lead: &Lead) -> Result<SinkResponse, SinkError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .with_trace_context()
            .send()
            .await
            .map_err(|e| SinkError::from_transport(self.name(), e))?;

        read_response(self.name(), response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lead() -> Lead {
        Lead {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            property_references: "p1, p7".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_lead_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_json(json!({
                "Name": "Ada",
                "Email": "ada@example.com",
                "Phone": "555-0100",
                "Property References": "p1, p7"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("Accepted"))
            .expect(1)
            .mount(&server)
            .await;

        let sink = WebhookSink::new(format!("{}/hook", server.uri()), Client::new());
        let response = sink.deliver(&lead()).await.unwrap();

        assert_eq!(
            response,
            SinkResponse {
                status: 200,
                body: "Accepted".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let sink = WebhookSink::new("http://127.0.0.1:1/hook", Client::new());
        let err = sink.deliver(&lead()).await.unwrap_err();
        assert!(matches!(err, SinkError::Transport { sink: "make", .. }));
    }
}
