//! HTTP handlers for property-service.

pub mod diagnostics;
pub mod generate;
pub mod health;
pub mod leads;
pub mod properties;
pub mod viewings;

pub use diagnostics::{echo, index};
pub use generate::generate;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use leads::capture_lead;
pub use properties::search_properties;
pub use viewings::schedule_viewing;
