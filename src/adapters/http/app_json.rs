use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::app_error::AppError;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// `Json` body extractor whose rejection goes through `AppError`, so a
/// malformed body gets the same `{error, code}` response as any other 400.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Serde detail stays in the logs.
        tracing::debug!(
            status = %rejection.status(),
            detail = %rejection.body_text(),
            "Rejected request body"
        );
        AppError::InvalidInput(INVALID_BODY_MESSAGE.into())
    }
}
