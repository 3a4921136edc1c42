//! # Availability Handlers
//!
//! This module exposes the core availability engine over HTTP: for a given
//! spa and date it returns every slot of the requested grid together with
//! its enabled/disabled flag.
//!
//! ## Evaluation
//!
//! The handler does no availability reasoning of its own. It:
//!
//! 1. Resolves the spa (through the detail cache)
//! 2. Fetches the reserved `(date, time)` pairs for that day (an empty
//!    result simply means no bookings yet)
//! 3. Captures the current time once
//! 4. Hands grid, date, clock, and reserved set to
//!    `spabook_core::availability::day_availability`
//!
//! Capturing the clock once per request keeps a single render pass
//! internally consistent: either every slot sees the same `now`, or none
//! does.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::{collections::HashSet, sync::Arc};

use spabook_core::{
    availability::day_availability,
    errors::BookingError,
    models::{
        booking::{AvailabilityResponse, SlotStatusResponse},
        slot::{ReservedSlot, SlotGrid, SlotTime},
    },
};
use uuid::Uuid;

use crate::{handlers::spa::load_spa, middleware::error_handling::AppError, ApiState};

/// Query parameters for the day availability endpoint.
///
/// # Fields
///
/// * `date` - Calendar date to evaluate (YYYY-MM-DD)
/// * `grid` - Slot grid to use: "half-hour" (default) or "hourly"
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar date to evaluate
    pub date: NaiveDate,

    /// Which slot grid to generate
    pub grid: Option<String>,
}

/// Resolves the `grid` query parameter to one of the supported grids.
pub(crate) fn parse_grid(grid: Option<&str>) -> Result<SlotGrid, AppError> {
    match grid.unwrap_or("half-hour") {
        "half-hour" => Ok(SlotGrid::half_hour_day()),
        "hourly" => Ok(SlotGrid::hourly_extended()),
        other => Err(AppError(BookingError::Validation(format!(
            "Unknown grid '{}': expected 'half-hour' or 'hourly'",
            other
        )))),
    }
}

/// Collects the reserved `(date, time)` pairs from booking rows into the
/// set form the evaluator takes.
pub(crate) fn reserved_set(rows: &[spabook_db::models::DbBooking]) -> HashSet<ReservedSlot> {
    rows.iter()
        .map(|row| ReservedSlot::new(row.booking_date, SlotTime::from_naive_time(row.slot_time)))
        .collect()
}

/// Returns every slot of the grid for one day at a spa, flagged
/// available/unavailable.
///
/// # Endpoint
///
/// ```text
/// GET /api/spas/:id/availability?date=2025-06-10&grid=half-hour
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Spa does not exist
/// * `BookingError::Validation` - Unknown grid name
/// * `BookingError::Storage` - Database error
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(spa_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let grid = parse_grid(query.grid.as_deref())?;
    let spa = load_spa(&state, spa_id).await?;

    // Reserved pairs for the requested day only; the evaluator ignores
    // other dates anyway
    let rows = spabook_db::repositories::booking::get_reserved_slots(
        &state.db_pool,
        spa.id,
        Some(query.date),
        Some(query.date),
    )
    .await
    .map_err(BookingError::Storage)?;
    let reserved = reserved_set(&rows);

    // One clock capture for the whole render pass
    let now = Utc::now().naive_utc();

    let slots = day_availability(&grid, query.date, now, &reserved)
        .into_iter()
        .map(|status| SlotStatusResponse {
            time: status.time,
            available: status.available,
        })
        .collect();

    Ok(Json(AvailabilityResponse {
        spa_id: spa.id,
        date: query.date,
        slots,
    }))
}
