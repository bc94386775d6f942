use super::{LeadSink, SinkError, SinkResponse};
use crate::models::Lead;
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording sink for tests and local runs.
pub struct MockLeadSink {
    name: &'static str,
    reply: Result<SinkResponse, String>,
    received: Mutex<Vec<Lead>>,
}

impl MockLeadSink {
    /// A sink that answers every delivery with `status` and `body`.
    pub fn responding(name: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            name,
            reply: Ok(SinkResponse {
                status,
                body: body.into(),
            }),
            received: Mutex::new(Vec::new()),
        }
    }

    /// A sink whose every delivery fails at the transport level.
    pub fn unreachable(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            reply: Err(message.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Lead> {
        self.received
            .lock()
            .map(|leads| leads.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LeadSink for MockLeadSink {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn deliver(&self, lead: &Lead) -> Result<SinkResponse, SinkError> {
        if let Ok(mut leads) = self.received.lock() {
            leads.push(lead.clone());
        }

        tracing::info!(sink = self.name, "[MOCK] Lead would be delivered");

        self.reply.clone().map_err(|message| SinkError::Transport {
            sink: self.name,
            message,
        })
    }
}
