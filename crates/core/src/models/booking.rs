use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::slot::SlotTime;

/// A validated booking handed to the recorder for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub spa_id: Uuid,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub customer_id: String,
    pub contact: String,
    pub notes: Option<String>,
}

/// Persists a confirmed booking.
///
/// Implementations must report a uniqueness race as
/// [`BookingError::Conflict`](crate::errors::BookingError::Conflict) so the
/// confirmation flow can distinguish "slot just taken" from a transport
/// failure.
#[async_trait]
pub trait BookingRecorder: Send + Sync {
    async fn record(&self, booking: &NewBooking) -> BookingResult<Uuid>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub date: NaiveDate,
    pub time: SlotTime,
    pub customer_id: String,
    pub contact: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub spa_id: Uuid,
    pub date: NaiveDate,
    pub time: SlotTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservedSlotResponse {
    pub date: NaiveDate,
    pub time: SlotTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetReservedSlotsResponse {
    pub spa_id: Uuid,
    pub slots: Vec<ReservedSlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerBookingResponse {
    pub id: Uuid,
    pub spa_id: Uuid,
    pub date: NaiveDate,
    pub time: SlotTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCustomerBookingsResponse {
    pub customer_id: String,
    pub bookings: Vec<CustomerBookingResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotStatusResponse {
    pub time: SlotTime,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub spa_id: Uuid,
    pub date: NaiveDate,
    pub slots: Vec<SlotStatusResponse>,
}
