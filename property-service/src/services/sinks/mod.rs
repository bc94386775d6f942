//! Downstream services that receive captured leads.
//!
//! Sinks report what the remote end said without judging it: any HTTP status
//! is a delivered response. Only transport faults are errors.

pub mod airtable;
pub mod mock;
pub mod webhook;

use crate::models::Lead;
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

pub use airtable::AirtableSink;
pub use mock::MockLeadSink;
pub use webhook::WebhookSink;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("{sink}: {message}")]
    Transport { sink: &'static str, message: String },

    #[error("{sink}: request timed out: {message}")]
    Timeout { sink: &'static str, message: String },
}

impl SinkError {
    /// Classify a `reqwest` failure for `sink`.
    pub fn from_transport(sink: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SinkError::Timeout {
                sink,
                message: err.to_string(),
            }
        } else {
            SinkError::Transport {
                sink,
                message: err.to_string(),
            }
        }
    }
}

impl From<SinkError> for AppError {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Timeout { .. } => AppError::TimeoutError(err.to_string()),
            SinkError::Transport { .. } => AppError::UpstreamError(err.to_string()),
        }
    }
}

/// Raw outcome of a delivery, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkResponse {
    pub status: u16,
    pub body: String,
}

impl SinkResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Short label used in logs, metrics and errors.
    fn name(&self) -> &'static str;

    async fn deliver(&self, lead: &Lead) -> Result<SinkResponse, SinkError>;
}

/// Read status and body from a sink reply, logging both.
pub(crate) async fn read_response(
    sink: &'static str,
    response: reqwest::Response,
) -> Result<SinkResponse, SinkError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| SinkError::from_transport(sink, e))?;

    tracing::info!(sink, status, body = %body, "Lead sink responded");

    Ok(SinkResponse { status, body })
}
