use crate::models::Lead;
use crate::services::metrics;
use crate::services::sinks::{LeadSink, SinkError, SinkResponse};
use std::sync::Arc;

/// Raw replies from both sinks, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadReceipt {
    pub webhook: SinkResponse,
    pub records: SinkResponse,
}

/// Forwards a lead to the automation webhook, then to the record store.
///
/// There is no rollback: if the second delivery fails the first has
/// already happened.
#[derive(Clone)]
pub struct LeadIntake {
    webhook: Arc<dyn LeadSink>,
    records: Arc<dyn LeadSink>,
}

impl LeadIntake {
    pub fn new(webhook: Arc<dyn LeadSink>, records: Arc<dyn LeadSink>) -> Self {
        Self { webhook, records }
    }

    pub async fn capture(&self, lead: &Lead) -> Result<LeadReceipt, SinkError> {
        let webhook = dispatch(self.webhook.as_ref(), lead).await?;
        let records = dispatch(self.records.as_ref(), lead).await?;

        Ok(LeadReceipt { webhook, records })
    }
}

async fn dispatch(sink: &dyn LeadSink, lead: &Lead) -> Result<SinkResponse, SinkError> {
    match sink.deliver(lead).await {
        Ok(response) => {
            metrics::record_sink_dispatch(sink.name(), &format!("{}xx", response.status / 100));
            if !response.is_success() {
                tracing::warn!(
                    sink = sink.name(),
                    status = response.status,
                    "Lead sink returned a non-success status"
                );
            }
            Ok(response)
        }
        Err(e) => {
            metrics::record_sink_dispatch(sink.name(), "transport_error");
            tracing::error!(sink = sink.name(), error = %e, "Lead delivery failed");
            Err(e)
        }
    }
}
