use crate::models::DbBooking;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Conditionally inserts a booking. Returns `None` when the slot is
/// already taken: the insert yields nothing instead of tripping the
/// unique constraint, so a lost race is an answer rather than an error.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    spa_id: Uuid,
    booking_date: NaiveDate,
    slot_time: NaiveTime,
    customer_id: &str,
    contact: &str,
    notes: Option<&str>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, spa_id={}, date={}, time={}",
        id,
        spa_id,
        booking_date,
        slot_time
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, spa_id, booking_date, slot_time, customer_id, contact, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT ON CONSTRAINT unique_spa_slot DO NOTHING
        RETURNING id, spa_id, booking_date, slot_time, customer_id, contact, notes, created_at
        "#,
    )
    .bind(id)
    .bind(spa_id)
    .bind(booking_date)
    .bind(slot_time)
    .bind(customer_id)
    .bind(contact)
    .bind(notes)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_none() {
        tracing::debug!(
            "Booking conflict: spa_id={}, date={}, time={} already taken",
            spa_id,
            booking_date,
            slot_time
        );
    }

    Ok(booking)
}

pub async fn get_reserved_slots(
    pool: &Pool<Postgres>,
    spa_id: Uuid,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<DbBooking>> {
    tracing::debug!(
        "Getting reserved slots: spa_id={}, from={:?}, to={:?}",
        spa_id,
        from,
        to
    );

    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, spa_id, booking_date, slot_time, customer_id, contact, notes, created_at
        FROM bookings
        WHERE spa_id = $1
          AND ($2::date IS NULL OR booking_date >= $2)
          AND ($3::date IS NULL OR booking_date <= $3)
        ORDER BY booking_date ASC, slot_time ASC
        "#,
    )
    .bind(spa_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_bookings_by_customer(
    pool: &Pool<Postgres>,
    customer_id: &str,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, spa_id, booking_date, slot_time, customer_id, contact, notes, created_at
        FROM bookings
        WHERE customer_id = $1
        ORDER BY booking_date ASC, slot_time ASC
        "#,
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
