use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;
use tracing::error;

use tm_core::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("too many requests: {0}")]
    TooManyRequests(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

/// Error envelope the frontend expects: `{ "success": false, "error": ... }`.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        error!(status = %status, error = %self, "api_error");

        let body = Json(ErrorResponse {
            success: false,
            error: self.public_message().into_owned(),
        });

        (status, body).into_response()
    }
}

impl ApiError {
    /// Client-caused errors echo their message; everything else stays generic
    /// so backend details never reach the wire.
    fn public_message(&self) -> Cow<'_, str> {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                Cow::Borrowed(msg.as_str())
            }
            ApiError::TooManyRequests(_) => Cow::Borrowed("too many requests"),
            ApiError::ServiceUnavailable(_) => Cow::Borrowed("service unavailable"),
            ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Conflict(id) => ApiError::Conflict(format!("profile already exists: {id}")),
            StoreError::Backend(msg) => ApiError::Internal(msg),
        }
    }
}
