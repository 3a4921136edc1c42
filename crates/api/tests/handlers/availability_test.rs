use axum::Json;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use mockall::predicate;
use spabook_core::{
    availability::day_availability,
    errors::BookingError,
    models::{
        booking::{AvailabilityResponse, SlotStatusResponse},
        slot::{ReservedSlot, SlotGrid, SlotTime},
    },
};
use spabook_db::models::DbSpa;
use uuid::Uuid;

use crate::test_utils::TestContext;
use spabook_api::middleware::error_handling::AppError;

fn spa_row(id: Uuid, name: &str) -> DbSpa {
    DbSpa {
        id,
        name: name.to_string(),
        address: "12 Lakeside Drive".to_string(),
        created_at: Utc::now(),
    }
}

fn booking_row(spa_id: Uuid, date: NaiveDate, time: NaiveTime) -> spabook_db::models::DbBooking {
    spabook_db::models::DbBooking {
        id: Uuid::new_v4(),
        spa_id,
        booking_date: date,
        slot_time: time,
        customer_id: "customer-1".to_string(),
        contact: "customer1@example.com".to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

// Mirrors the availability handler against the mocks: resolve the grid and
// the spa, fetch the day's reserved pairs, then evaluate with one clock
async fn test_get_availability_wrapper(
    ctx: &mut TestContext,
    spa_id: Uuid,
    date: NaiveDate,
    grid: Option<&str>,
    now: NaiveDateTime,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let grid = match grid.unwrap_or("half-hour") {
        "half-hour" => SlotGrid::half_hour_day(),
        "hourly" => SlotGrid::hourly_extended(),
        other => {
            return Err(AppError(BookingError::Validation(format!(
                "Unknown grid '{}': expected 'half-hour' or 'hourly'",
                other
            ))));
        }
    };

    let spa = ctx
        .spa_repo
        .get_spa_by_id(spa_id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Spa with ID {} not found", spa_id)))?;

    let rows = ctx
        .booking_repo
        .get_reserved_slots(spa.id, Some(date), Some(date))
        .await?;
    let reserved = rows
        .iter()
        .map(|row| ReservedSlot::new(row.booking_date, SlotTime::from_naive_time(row.slot_time)))
        .collect();

    let slots = day_availability(&grid, date, now, &reserved)
        .into_iter()
        .map(|status| SlotStatusResponse {
            time: status.time,
            available: status.available,
        })
        .collect();

    Ok(Json(AvailabilityResponse {
        spa_id: spa.id,
        date,
        slots,
    }))
}

#[tokio::test]
async fn test_get_availability_spa_not_found() {
    let mut ctx = TestContext::new();
    let missing_id = Uuid::new_v4();

    ctx.spa_repo
        .expect_get_spa_by_id()
        .with(predicate::eq(missing_id))
        .returning(|_| Ok(None));

    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let now = date.pred_opt().unwrap().and_hms_opt(9, 0, 0).unwrap();

    let result = test_get_availability_wrapper(&mut ctx, missing_id, date, None, now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_get_availability_unknown_grid() {
    let mut ctx = TestContext::new();
    let spa_id = Uuid::new_v4();

    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let now = date.and_hms_opt(9, 0, 0).unwrap();

    // The grid is rejected before any repository call
    let result =
        test_get_availability_wrapper(&mut ctx, spa_id, date, Some("quarter-hour"), now).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_get_availability_flags_reserved_and_lead_window() {
    let mut ctx = TestContext::new();
    let spa_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    ctx.spa_repo
        .expect_get_spa_by_id()
        .with(predicate::eq(spa_id))
        .returning(move |id| Ok(Some(spa_row(id, "Willow Springs"))));

    ctx.booking_repo
        .expect_get_reserved_slots()
        .returning(move |spa_id, _, _| {
            Ok(vec![booking_row(
                spa_id,
                date,
                NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            )])
        });

    // Same-day request at 09:00: the lead window runs through 10:00
    let now = date.and_hms_opt(9, 0, 0).unwrap();
    let result = test_get_availability_wrapper(&mut ctx, spa_id, date, None, now).await;

    let response = result.unwrap().0;
    assert_eq!(response.spa_id, spa_id);
    assert_eq!(response.date, date);
    assert_eq!(response.slots.len(), 25);

    let by_time = |hour: u8, minute: u8| {
        let time = SlotTime::new(hour, minute).unwrap();
        response
            .slots
            .iter()
            .find(|s| s.time == time)
            .unwrap_or_else(|| panic!("missing slot {}", time))
    };

    // Pinned opening slot is present and inside the lead window
    assert!(!by_time(8, 30).available);
    // Exactly on the cutoff: still disabled
    assert!(!by_time(10, 0).available);
    // First slot past the cutoff
    assert!(by_time(10, 30).available);
    // Reserved by the mock booking
    assert!(!by_time(14, 0).available);
    assert!(by_time(14, 30).available);
}

#[tokio::test]
async fn test_get_availability_tolerates_no_bookings() {
    let mut ctx = TestContext::new();
    let spa_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    ctx.spa_repo
        .expect_get_spa_by_id()
        .returning(move |id| Ok(Some(spa_row(id, "Willow Springs"))));

    ctx.booking_repo
        .expect_get_reserved_slots()
        .returning(|_, _, _| Ok(Vec::new()));

    // A day in the future on the hourly grid: everything is open
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let result =
        test_get_availability_wrapper(&mut ctx, spa_id, date, Some("hourly"), now).await;

    let response = result.unwrap().0;
    assert_eq!(response.slots.len(), 15);
    assert!(response.slots.iter().all(|s| s.available));
}
