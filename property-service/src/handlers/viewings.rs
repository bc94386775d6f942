use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::{Validate, ValidationError};

use crate::models::{PropertyId, Viewing};
use crate::services::metrics;
use crate::startup::AppState;
use crate::utils::{ValidatedJson, MISSING_REQUIRED_INFORMATION};

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_property_id"))]
pub struct ScheduleViewingRequest {
    #[validate(required)]
    pub property_id: Option<PropertyId>,
    #[validate(required, length(min = 1))]
    pub user_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub user_email: Option<String>,
    #[validate(required, length(min = 1))]
    pub viewing_time: Option<String>,
}

fn validate_property_id(request: &ScheduleViewingRequest) -> Result<(), ValidationError> {
    match &request.property_id {
        Some(id) if id.is_blank() => Err(ValidationError::new("property_id_blank")),
        _ => Ok(()),
    }
}

impl TryFrom<ScheduleViewingRequest> for Viewing {
    type Error = AppError;

    fn try_from(request: ScheduleViewingRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::ValidationError(MISSING_REQUIRED_INFORMATION.to_string());

        Ok(Viewing {
            property_id: request.property_id.ok_or_else(missing)?,
            user_name: request.user_name.ok_or_else(missing)?,
            user_email: request.user_email.ok_or_else(missing)?,
            viewing_time: request.viewing_time.ok_or_else(missing)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleViewingResponse {
    pub message: String,
    pub viewing: Viewing,
}

#[tracing::instrument(skip(state, request))]
pub async fn schedule_viewing(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ScheduleViewingRequest>,
) -> Result<Json<ScheduleViewingResponse>, AppError> {
    let viewing = Viewing::try_from(request)?;

    let total = state.viewings.schedule(viewing.clone()).await;
    metrics::record_viewing_scheduled();

    tracing::info!(
        property_id = %viewing.property_id,
        viewing_time = %viewing.viewing_time,
        total,
        "Viewing scheduled"
    );

    Ok(Json(ScheduleViewingResponse {
        message: "Viewing scheduled successfully".to_string(),
        viewing,
    }))
}
