use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use spabook_core::errors::BookingResult;
use spabook_core::models::booking::NewBooking;
use uuid::Uuid;

use crate::models::{DbBooking, DbSpa};

// Mock repositories for testing
mock! {
    pub SpaRepo {
        pub async fn create_spa(
            &self,
            name: &'static str,
            address: &'static str,
        ) -> eyre::Result<DbSpa>;

        pub async fn get_spa_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSpa>>;

        pub async fn list_spas(&self) -> eyre::Result<Vec<DbSpa>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            spa_id: Uuid,
            booking_date: NaiveDate,
            slot_time: NaiveTime,
            customer_id: &'static str,
            contact: &'static str,
            notes: Option<&'static str>,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_reserved_slots(
            &self,
            spa_id: Uuid,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_bookings_by_customer(
            &self,
            customer_id: &'static str,
        ) -> eyre::Result<Vec<DbBooking>>;
    }
}

mock! {
    pub BookingRecorder {
        pub async fn record(&self, booking: NewBooking) -> BookingResult<Uuid>;
    }
}
