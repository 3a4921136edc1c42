//! # Availability Engine
//!
//! Slot generation and availability evaluation for spa bookings.
//!
//! The same two pieces of logic used to be repeated near-verbatim on every
//! booking screen with slightly different constants; here they exist once,
//! parameterized by [`SlotGrid`].
//!
//! ## Evaluation rules
//!
//! A candidate `(date, time)` is bookable unless, checked in order:
//!
//! 1. the date is strictly before today,
//! 2. the date is today and the time is not strictly later than
//!    `now + 1 hour` (same-day bookings carry a minimum lead time; the
//!    boundary is exclusive, so a slot exactly at the cutoff stays
//!    disabled),
//! 3. the exact `(date, time)` pair is already reserved.
//!
//! Both functions are pure. `now` and the reserved set are explicit
//! parameters, so callers own the clock (captured once per render pass or
//! per confirmation, never re-read mid-flow) and tests need no wall clock.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::slot::{ReservedSlot, SlotGrid, SlotTime};

/// Minimum interval between the current moment and a same-day booking's
/// start time. Bookings have no modeled duration, so this is the only
/// time-proximity rule; if adjacent-slot blocking ever becomes a
/// requirement it belongs next to this constant.
pub const LEAD_TIME_MINUTES: i64 = 60;

/// A generated slot paired with its availability flag for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStatus {
    pub time: SlotTime,
    pub available: bool,
}

/// Produces the ordered bookable slots for one day of `grid`.
///
/// Slots run from `start_hour:00` to `end_hour:00` inclusive, stepping by
/// `step_minutes`. When the grid pins a `first_slot`, it replaces the first
/// generated entry; the rest of the day stays on the regular step.
pub fn generate_slots(grid: &SlotGrid) -> Vec<SlotTime> {
    let step = grid.step_minutes as u32;
    let end = grid.end_hour as u32 * 60;

    let mut slots = Vec::with_capacity(((end / step) + 1) as usize);
    let mut minutes = grid.start_hour as u32 * 60;
    while minutes <= end {
        slots.push(SlotTime {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        });
        minutes += step;
    }

    if let Some(first) = grid.first_slot {
        if let Some(slot) = slots.first_mut() {
            *slot = first;
        }
    }

    slots
}

/// Decides whether `(date, time)` may be offered for booking.
pub fn is_available(
    date: NaiveDate,
    time: SlotTime,
    now: NaiveDateTime,
    reserved: &HashSet<ReservedSlot>,
) -> bool {
    let today = now.date();

    if date < today {
        return false;
    }

    if date == today {
        let cutoff = now + Duration::minutes(LEAD_TIME_MINUTES);
        // A cutoff that rolls past midnight closes out the rest of today
        if cutoff.date() > today || time <= SlotTime::from_naive_time(cutoff.time()) {
            return false;
        }
    }

    !reserved.contains(&ReservedSlot { date, time })
}

/// Evaluates every slot of `grid` for `date` in one pass, against a single
/// captured `now`.
pub fn day_availability(
    grid: &SlotGrid,
    date: NaiveDate,
    now: NaiveDateTime,
    reserved: &HashSet<ReservedSlot>,
) -> Vec<SlotStatus> {
    generate_slots(grid)
        .into_iter()
        .map(|time| SlotStatus {
            time,
            available: is_available(date, time, now, reserved),
        })
        .collect()
}
