use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::models::Property;
use crate::services::{metrics, PropertyFilter};
use crate::startup::AppState;
use crate::utils::AppJson;

/// Search criteria. Absent, empty and zero values do not constrain the result.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPropertiesRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
}

impl SearchPropertiesRequest {
    pub fn filter(&self) -> PropertyFilter {
        PropertyFilter::new(
            self.city.as_deref(),
            self.property_type.as_deref(),
            self.bedrooms,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SearchPropertiesResponse {
    pub properties: Vec<Property>,
}

#[tracing::instrument(skip(state, request))]
pub async fn search_properties(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchPropertiesRequest>,
) -> Result<Json<SearchPropertiesResponse>, AppError> {
    let filter = request.filter();
    let properties = state.catalog.search(&filter);

    metrics::record_search_results(properties.len());
    tracing::debug!(?filter, matched = properties.len(), "Property search");

    Ok(Json(SearchPropertiesResponse { properties }))
}
