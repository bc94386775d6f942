use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

pub const MISSING_REQUIRED_INFORMATION: &str = "Missing required information";

/// `Json<T>` whose rejection is the service error envelope instead of plain text.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// JSON body that must also pass its `Validate` rules.
///
/// Any rule failure is reported as a single "missing required information"
/// validation error; the individual field errors are only logged.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;

        value.validate().map_err(|e| {
            tracing::debug!(errors = %e, "Request failed validation");
            AppError::ValidationError(MISSING_REQUIRED_INFORMATION.to_string())
        })?;

        Ok(ValidatedJson(value))
    }
}
