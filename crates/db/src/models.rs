use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSpa {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub spa_id: Uuid,
    pub booking_date: NaiveDate,
    pub slot_time: NaiveTime,
    pub customer_id: String,
    pub contact: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
