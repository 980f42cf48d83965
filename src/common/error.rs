// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;

pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const DELIVERY_FAILED: &str = "Failed to send message. Please email directly.";
pub const UNEXPECTED_FAILURE: &str = "Something went wrong. Please try again.";

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    /// The email provider rejected or failed the send. The provider's own
    /// message is logged where the failure happens and never returned.
    #[error("Email delivery failed")]
    EmailDelivery,

    #[error("Internal Server Error: {0}")]
    InternalServer(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::EmailDelivery | ApiError::InternalServer(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self {
            ApiError::ValidationError(msg) => msg,
            ApiError::EmailDelivery => DELIVERY_FAILED.to_string(),
            ApiError::InternalServer(detail) => {
                error!(error = %detail, "Contact API error");
                UNEXPECTED_FAILURE.to_string()
            }
        };

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InternalServer(format!("invalid request body: {}", e))
    }
}
