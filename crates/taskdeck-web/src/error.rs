//! Translation of domain errors into HTTP responses.
//!
//! The error taxonomy itself carries no transport concerns; this is the only
//! place where domain errors become status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taskdeck_core::TaskdeckError;

/// Wrapper turning a [`TaskdeckError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub TaskdeckError);

impl From<TaskdeckError> for ApiError {
    fn from(e: TaskdeckError) -> Self {
        Self(e)
    }
}

/// Error response body for JSON responses.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self.0 {
            TaskdeckError::ProjectNotFound(_) | TaskdeckError::TaskNotFound(_) => {
                (StatusCode::NOT_FOUND, "Not found", Some(self.0.to_string()))
            }
            TaskdeckError::ValidationError(_) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(self.0.to_string()),
            ),
            TaskdeckError::InvalidStatusTransition { .. } => (
                StatusCode::BAD_REQUEST,
                "Invalid status transition",
                Some(self.0.to_string()),
            ),
            // Anything else is a server-side fault: log it, never expose it.
            TaskdeckError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
