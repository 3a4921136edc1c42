//! # Booking Handlers
//!
//! Booking submission and reserved-slot queries.
//!
//! Submission mirrors the confirmation step of the booking flow: the
//! candidate is re-validated against fresh reserved slots and a single
//! captured clock before the recorder is invoked, so a stale candidate is
//! rejected without ever reaching storage. The storage layer's unique
//! constraint remains the final authority on races that slip between the
//! check and the write.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use spabook_core::{
    availability::is_available,
    errors::BookingError,
    models::booking::{
        BookingRecorder, CreateBookingRequest, CreateBookingResponse, CustomerBookingResponse,
        GetCustomerBookingsResponse, GetReservedSlotsResponse, NewBooking, ReservedSlotResponse,
    },
    models::slot::SlotTime,
};
use spabook_db::recorder::PgBookingRecorder;
use uuid::Uuid;

use crate::{
    handlers::availability::reserved_set, handlers::spa::load_spa,
    middleware::error_handling::AppError, ApiState,
};

/// Query parameters for the reserved-slot listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ReservedSlotsQuery {
    /// Earliest booking date to include
    pub from: Option<NaiveDate>,

    /// Latest booking date to include
    pub to: Option<NaiveDate>,
}

/// Submits a booking for a spa.
///
/// # Endpoint
///
/// ```text
/// POST /api/spas/:id/bookings
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Spa does not exist
/// * `BookingError::IncompleteSelection` - Missing customer or contact
/// * `BookingError::SlotUnavailable` - Slot no longer offered (stale
///   candidate caught before the write)
/// * `BookingError::Conflict` - Another booking won the race at the
///   storage layer
/// * `BookingError::Storage` - Database error
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Path(spa_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    // Local validation first: nothing below runs for an incomplete form
    if payload.customer_id.trim().is_empty() {
        return Err(AppError(BookingError::IncompleteSelection(
            "A customer identity is required".to_string(),
        )));
    }
    if payload.contact.trim().is_empty() {
        return Err(AppError(BookingError::IncompleteSelection(
            "Contact information is required".to_string(),
        )));
    }

    let spa = load_spa(&state, spa_id).await?;

    // Fresh reserved slots for the candidate's day
    let rows = spabook_db::repositories::booking::get_reserved_slots(
        &state.db_pool,
        spa.id,
        Some(payload.date),
        Some(payload.date),
    )
    .await
    .map_err(BookingError::Storage)?;
    let reserved = reserved_set(&rows);

    // The clock is captured once for this confirmation
    let now = Utc::now().naive_utc();

    // Re-validate before writing; a stale candidate never reaches the
    // recorder
    if !is_available(payload.date, payload.time, now, &reserved) {
        return Err(AppError(BookingError::SlotUnavailable(
            "This time was just taken".to_string(),
        )));
    }

    let recorder = PgBookingRecorder::new(state.db_pool.clone());
    let booking = NewBooking {
        spa_id: spa.id,
        date: payload.date,
        time: payload.time,
        customer_id: payload.customer_id,
        contact: payload.contact,
        notes: payload.notes,
    };
    let id = recorder.record(&booking).await?;

    Ok(Json(CreateBookingResponse {
        id,
        spa_id: spa.id,
        date: booking.date,
        time: booking.time,
    }))
}

/// Lists the reserved `(date, time)` pairs for a spa, optionally scoped to
/// a date range. An empty list just means no bookings yet.
///
/// # Endpoint
///
/// ```text
/// GET /api/spas/:id/bookings?from=2025-06-01&to=2025-06-30
/// ```
#[axum::debug_handler]
pub async fn get_reserved_slots(
    State(state): State<Arc<ApiState>>,
    Path(spa_id): Path<Uuid>,
    Query(query): Query<ReservedSlotsQuery>,
) -> Result<Json<GetReservedSlotsResponse>, AppError> {
    let spa = load_spa(&state, spa_id).await?;

    let rows = spabook_db::repositories::booking::get_reserved_slots(
        &state.db_pool,
        spa.id,
        query.from,
        query.to,
    )
    .await
    .map_err(BookingError::Storage)?;

    let response = GetReservedSlotsResponse {
        spa_id: spa.id,
        slots: rows
            .into_iter()
            .map(|row| ReservedSlotResponse {
                date: row.booking_date,
                time: SlotTime::from_naive_time(row.slot_time),
            })
            .collect(),
    };

    Ok(Json(response))
}

/// Lists a customer's bookings across all spas, oldest first.
///
/// # Endpoint
///
/// ```text
/// GET /api/customers/:id/bookings
/// ```
#[axum::debug_handler]
pub async fn get_customer_bookings(
    State(state): State<Arc<ApiState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<GetCustomerBookingsResponse>, AppError> {
    let rows = spabook_db::repositories::booking::get_bookings_by_customer(
        &state.db_pool,
        &customer_id,
    )
    .await
    .map_err(BookingError::Storage)?;

    let response = GetCustomerBookingsResponse {
        customer_id,
        bookings: rows
            .into_iter()
            .map(|row| CustomerBookingResponse {
                id: row.id,
                spa_id: row.spa_id,
                date: row.booking_date,
                time: SlotTime::from_naive_time(row.slot_time),
            })
            .collect(),
    };

    Ok(Json(response))
}
