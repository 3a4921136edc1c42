use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A bookable time-of-day value, minute granularity.
///
/// Ordering and equality follow clock order, so a derived `Ord` over
/// `(hour, minute)` is correct and `SlotTime` can be used directly as a
/// set or map key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    pub hour: u8,
    pub minute: u8,
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for SlotTime {
    type Error = BookingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl SlotTime {
    pub fn new(hour: u8, minute: u8) -> BookingResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(BookingError::Validation(format!(
                "Invalid slot time {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Minutes since midnight, for lead-time comparisons.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // Fields are validated on construction, this cannot be out of range
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or_else(|| {
            BookingError::Validation(format!("Invalid slot time '{s}', expected HH:MM"))
        })?;
        let hour = hour
            .parse::<u8>()
            .map_err(|_| BookingError::Validation(format!("Invalid hour in '{s}'")))?;
        let minute = minute
            .parse::<u8>()
            .map_err(|_| BookingError::Validation(format!("Invalid minute in '{s}'")))?;
        SlotTime::new(hour, minute)
    }
}

/// Configuration for a day's bookable grid.
///
/// `first_slot` reproduces the pinned off-grid opening slot used by the
/// booking screens: when set, it replaces the first generated entry while
/// the rest of the day follows the regular step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    pub start_hour: u8,
    pub end_hour: u8,
    pub step_minutes: u8,
    pub first_slot: Option<SlotTime>,
}

impl SlotGrid {
    pub fn new(
        start_hour: u8,
        end_hour: u8,
        step_minutes: u8,
        first_slot: Option<SlotTime>,
    ) -> BookingResult<Self> {
        if start_hour >= end_hour || end_hour > 23 {
            return Err(BookingError::Validation(format!(
                "Invalid grid hours {start_hour}..{end_hour}"
            )));
        }
        if step_minutes == 0 || 60 % step_minutes != 0 {
            return Err(BookingError::Validation(format!(
                "Grid step of {step_minutes} minutes must divide 60"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
            step_minutes,
            first_slot,
        })
    }

    /// The day-spa grid: 08:00-20:00 every 30 minutes, first slot pinned
    /// to 08:30.
    pub fn half_hour_day() -> Self {
        Self {
            start_hour: 8,
            end_hour: 20,
            step_minutes: 30,
            first_slot: Some(SlotTime { hour: 8, minute: 30 }),
        }
    }

    /// The extended-hours grid: 08:00-22:00 hourly, no override.
    pub fn hourly_extended() -> Self {
        Self {
            start_hour: 8,
            end_hour: 22,
            step_minutes: 60,
            first_slot: None,
        }
    }
}

/// A confirmed booking's slot key. Two bookings for the same spa never
/// share a `ReservedSlot`; the storage layer enforces that with a unique
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservedSlot {
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl ReservedSlot {
    pub fn new(date: NaiveDate, time: SlotTime) -> Self {
        Self { date, time }
    }
}

/// A user's in-progress, unconfirmed choice. Held by the booking flow only;
/// becomes a [`ReservedSlot`] once the recorder accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSelection {
    pub date: NaiveDate,
    pub time: SlotTime,
}
