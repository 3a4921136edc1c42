//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the spabook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Both availability races land on `409 Conflict`: `SlotUnavailable` when
//! the proactive re-check catches the race before the write, and `Conflict`
//! when the storage layer's unique constraint catches it during the write.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use spabook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::IncompleteSelection(_) => StatusCode::BAD_REQUEST,
            BookingError::SlotUnavailable(_) => StatusCode::CONFLICT,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, BookingError>` in handlers returning `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, eyre::Report>`; the report is wrapped as a storage error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Storage(err))
    }
}

/// Maps a BookingError directly to an HTTP response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
