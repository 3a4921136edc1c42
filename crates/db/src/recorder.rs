use async_trait::async_trait;
use spabook_core::errors::{BookingError, BookingResult};
use spabook_core::models::booking::{BookingRecorder, NewBooking};
use uuid::Uuid;

use crate::{repositories, DbPool};

/// Postgres-backed [`BookingRecorder`]. The unique constraint on
/// `(spa_id, booking_date, slot_time)` settles concurrent submissions;
/// a lost race surfaces as [`BookingError::Conflict`].
pub struct PgBookingRecorder {
    pool: DbPool,
}

impl PgBookingRecorder {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRecorder for PgBookingRecorder {
    async fn record(&self, booking: &NewBooking) -> BookingResult<Uuid> {
        let created = repositories::booking::create_booking(
            &self.pool,
            booking.spa_id,
            booking.date,
            booking.time.to_naive_time(),
            &booking.customer_id,
            &booking.contact,
            booking.notes.as_deref(),
        )
        .await
        .map_err(BookingError::Storage)?;

        match created {
            Some(row) => Ok(row.id),
            None => Err(BookingError::Conflict(format!(
                "{} on {} is already booked",
                booking.time, booking.date
            ))),
        }
    }
}
