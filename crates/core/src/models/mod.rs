pub mod booking;
pub mod slot;
pub mod spa;
