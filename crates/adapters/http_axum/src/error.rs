//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use quill_domain::error::{QuillError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`QuillError`] and body rejections to an HTTP response with an
/// appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by a service or repository.
    Domain(QuillError),
    /// The request body was missing, not JSON, or did not match the schema.
    Body(JsonRejection),
}

impl From<QuillError> for ApiError {
    fn from(err: QuillError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Domain(QuillError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(QuillError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(QuillError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
            Self::Domain(QuillError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
