pub mod booking;
pub mod spa;
