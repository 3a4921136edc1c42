use axum::{http::StatusCode, response::IntoResponse};
use eyre::eyre;
use spabook_core::errors::BookingError;

use spabook_api::middleware::error_handling::{map_error, AppError};

#[test]
fn test_not_found_maps_to_404() {
    let response = map_error(BookingError::NotFound("Spa not found".to_string()));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_validation_maps_to_400() {
    let response = map_error(BookingError::Validation("Unknown grid".to_string()));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_incomplete_selection_maps_to_400() {
    let response = map_error(BookingError::IncompleteSelection(
        "Pick a time first".to_string(),
    ));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_slot_unavailable_maps_to_409() {
    let response = map_error(BookingError::SlotUnavailable(
        "This time was just taken".to_string(),
    ));
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_conflict_maps_to_409() {
    let response = map_error(BookingError::Conflict(
        "14:00 on 2025-06-10 is already booked".to_string(),
    ));
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_storage_maps_to_500() {
    let response = map_error(BookingError::Storage(eyre!("connection refused")));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_maps_to_500() {
    let err: Box<dyn std::error::Error + Send + Sync> = "boom".into();
    let response = map_error(BookingError::Internal(err));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_app_error_from_booking_error() {
    let app_err: AppError = BookingError::NotFound("missing".to_string()).into();
    let response = app_err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_app_error_from_eyre_report() {
    let app_err: AppError = eyre!("pool exhausted").into();
    match &app_err.0 {
        BookingError::Storage(_) => {} // Expected
        e => panic!("Expected Storage error, got: {:?}", e),
    }
    let response = app_err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
