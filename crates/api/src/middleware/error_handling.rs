//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies of the form
//! `{"error": "<message>"}`.

use availability_core::errors::AvailabilityError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// Lets handlers use `?` on anything returning `AvailabilityResult`.
#[derive(Debug)]
pub struct AppError(pub AvailabilityError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AvailabilityError::NotFound(_) => StatusCode::NOT_FOUND,
            AvailabilityError::Validation(_) => StatusCode::BAD_REQUEST,
            AvailabilityError::OutOfHours(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AvailabilityError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AvailabilityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        if status.is_server_error() {
            error!("Request failed: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AvailabilityError::Store(err))
    }
}
