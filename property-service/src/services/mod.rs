pub mod catalog;
pub mod lead_intake;
pub mod metrics;
pub mod providers;
pub mod sinks;
pub mod viewings;

pub use catalog::{CatalogError, CatalogStore, PropertyFilter};
pub use lead_intake::{LeadIntake, LeadReceipt};
pub use metrics::{get_metrics, init_metrics};
pub use providers::{
    GenerationParams, MockTextProvider, OpenAiTextProvider, ProviderError, ProviderResponse,
    TextProvider,
};
pub use sinks::{AirtableSink, LeadSink, MockLeadSink, SinkError, SinkResponse, WebhookSink};
pub use viewings::ViewingRegister;
