//! # Booking Confirmation Flow
//!
//! The state machine behind a booking screen:
//! `NoSelection -> DateChosen -> TimeChosen -> Confirming`, resolving to a
//! transient `Confirmed` or `Rejected` outcome.
//!
//! The flow owns the in-memory reserved set and re-validates the candidate
//! with a freshly captured clock at confirmation time; availability
//! observed at render time is never trusted, since the clock advances and
//! other clients book concurrently. The actual write is delegated to a
//! [`BookingRecorder`](crate::models::booking::BookingRecorder); a
//! candidate that fails re-validation never reaches it.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::availability::is_available;
use crate::errors::{BookingError, BookingResult};
use crate::models::slot::{CandidateSelection, ReservedSlot, SlotTime};

/// Where the user is in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NoSelection,
    DateChosen { date: NaiveDate },
    TimeChosen { date: NaiveDate, time: SlotTime },
    Confirming { date: NaiveDate, time: SlotTime },
}

/// Result of a completed confirmation attempt. Transient: surfaced to the
/// user once, never persisted.
#[derive(Debug)]
pub enum ConfirmOutcome {
    Confirmed(Uuid),
    Rejected(BookingError),
}

#[derive(Debug)]
pub struct BookingFlow {
    stage: Stage,
    reserved: HashSet<ReservedSlot>,
}

impl BookingFlow {
    pub fn new(reserved: HashSet<ReservedSlot>) -> Self {
        Self {
            stage: Stage::NoSelection,
            reserved,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn reserved(&self) -> &HashSet<ReservedSlot> {
        &self.reserved
    }

    /// Replaces the reserved set, e.g. when the screen regains focus.
    /// Ignored while a confirmation is in flight: that attempt works from
    /// the set captured at submission.
    pub fn refresh_reserved(&mut self, reserved: HashSet<ReservedSlot>) {
        if !matches!(self.stage, Stage::Confirming { .. }) {
            self.reserved = reserved;
        }
    }

    /// Picks a calendar date. Always clears a previously chosen time:
    /// slot availability is date-dependent, so a time carried across dates
    /// would be unvalidated.
    pub fn select_date(&mut self, date: NaiveDate) -> BookingResult<()> {
        if matches!(self.stage, Stage::Confirming { .. }) {
            return Err(BookingError::Validation(
                "A confirmation is in progress".to_string(),
            ));
        }
        self.stage = Stage::DateChosen { date };
        Ok(())
    }

    /// Picks a time slot for the chosen date. A slot the evaluator
    /// currently disables is rejected and the stage is left unchanged.
    pub fn select_time(&mut self, time: SlotTime, now: NaiveDateTime) -> BookingResult<()> {
        let date = match self.stage {
            Stage::DateChosen { date } | Stage::TimeChosen { date, .. } => date,
            Stage::NoSelection => {
                return Err(BookingError::IncompleteSelection(
                    "Choose a date before choosing a time".to_string(),
                ));
            }
            Stage::Confirming { .. } => {
                return Err(BookingError::Validation(
                    "A confirmation is in progress".to_string(),
                ));
            }
        };

        if !is_available(date, time, now, &self.reserved) {
            return Err(BookingError::SlotUnavailable(format!(
                "{time} on {date} cannot be booked"
            )));
        }

        self.stage = Stage::TimeChosen { date, time };
        Ok(())
    }

    /// Submits the current selection. `now` is captured here, once, and the
    /// evaluator is re-run against it; on success the stage moves to
    /// `Confirming` and the candidate is handed back for recording.
    ///
    /// A stale slot returns the flow to `TimeChosen` (or `DateChosen` when
    /// the date itself has passed) so the user can pick again.
    pub fn begin_confirm(&mut self, now: NaiveDateTime) -> BookingResult<CandidateSelection> {
        let (date, time) = match self.stage {
            Stage::TimeChosen { date, time } => (date, time),
            Stage::NoSelection | Stage::DateChosen { .. } => {
                return Err(BookingError::IncompleteSelection(
                    "Both a date and a time must be chosen before confirming".to_string(),
                ));
            }
            Stage::Confirming { .. } => {
                return Err(BookingError::Validation(
                    "A confirmation is already in progress".to_string(),
                ));
            }
        };

        if date < now.date() {
            self.stage = Stage::DateChosen { date };
            return Err(BookingError::SlotUnavailable(format!(
                "{date} has already passed"
            )));
        }

        if !is_available(date, time, now, &self.reserved) {
            return Err(BookingError::SlotUnavailable(
                "This time was just taken".to_string(),
            ));
        }

        self.stage = Stage::Confirming { date, time };
        Ok(CandidateSelection { date, time })
    }

    /// Applies the recorder's result to the in-flight confirmation.
    ///
    /// On success the new reservation is reflected in the local set before
    /// any further evaluation, so the same slot cannot be offered again.
    /// On a storage conflict the slot is marked reserved locally and the
    /// time choice is dropped; on any other failure the full candidate is
    /// preserved so the user can retry without re-entering anything.
    pub fn complete_confirm(&mut self, result: BookingResult<Uuid>) -> ConfirmOutcome {
        let (date, time) = match self.stage {
            Stage::Confirming { date, time } => (date, time),
            _ => {
                return ConfirmOutcome::Rejected(BookingError::Validation(
                    "No confirmation is in progress".to_string(),
                ));
            }
        };

        match result {
            Ok(id) => {
                self.reserved.insert(ReservedSlot { date, time });
                self.stage = Stage::NoSelection;
                ConfirmOutcome::Confirmed(id)
            }
            Err(err @ BookingError::Conflict(_)) => {
                self.reserved.insert(ReservedSlot { date, time });
                self.stage = Stage::DateChosen { date };
                ConfirmOutcome::Rejected(err)
            }
            Err(err) => {
                self.stage = Stage::TimeChosen { date, time };
                ConfirmOutcome::Rejected(err)
            }
        }
    }
}
