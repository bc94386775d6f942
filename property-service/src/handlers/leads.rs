use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

use crate::models::Lead;
use crate::startup::AppState;
use crate::utils::{ValidatedJson, MISSING_REQUIRED_INFORMATION};

#[derive(Debug, Deserialize, Validate)]
pub struct CaptureLeadRequest {
    #[validate(required, length(min = 1))]
    pub user_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub user_email: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,
    /// Free text; becomes the lead's property references.
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl TryFrom<CaptureLeadRequest> for Lead {
    type Error = AppError;

    fn try_from(request: CaptureLeadRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::ValidationError(MISSING_REQUIRED_INFORMATION.to_string());

        Ok(Lead {
            name: request.user_name.ok_or_else(missing)?,
            email: request.user_email.ok_or_else(missing)?,
            phone: request.phone_number.ok_or_else(missing)?,
            property_references: request.message.ok_or_else(missing)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CaptureLeadResponse {
    pub message: String,
    pub make_response: String,
    pub airtable_response: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn capture_lead(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CaptureLeadRequest>,
) -> Result<Json<CaptureLeadResponse>, AppError> {
    let lead = Lead::try_from(request)?;

    let receipt = state.lead_intake.capture(&lead).await?;

    tracing::info!(
        webhook_status = receipt.webhook.status,
        records_status = receipt.records.status,
        "Lead captured"
    );

    Ok(Json(CaptureLeadResponse {
        message: "Lead captured successfully".to_string(),
        make_response: receipt.webhook.body,
        airtable_response: receipt.records.body,
    }))
}
