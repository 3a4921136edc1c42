//! # Spabook Core
//!
//! Domain logic for the spa booking service: the bookable-slot model, the
//! slot generator and availability evaluator, and the booking confirmation
//! state machine. Everything in this crate is pure: the current time and
//! the set of reserved slots are always passed in explicitly, so the logic
//! is testable without a wall clock or a database.

pub mod availability;
pub mod cache;
pub mod errors;
pub mod flow;
pub mod models;
