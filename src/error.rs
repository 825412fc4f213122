//! Hard input errors.
//!
//! These abort a scheduling request before any plan is produced.
//! Feasibility shortfalls (slots running out, deadline overruns) are
//! not errors — they are reported through
//! [`FeasibilityResult`](crate::models::FeasibilityResult) and the
//! engine's infeasible outcome, because they are an expected branch of
//! normal operation.

use chrono::NaiveDate;
use thiserror::Error;

/// A request that cannot be scheduled at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The holiday table has no rules for the requested region.
    #[error("unknown holiday region '{0}'")]
    UnknownRegion(String),

    /// The preference can never yield a candidate slot.
    #[error("no available slots: {0}")]
    NoAvailableSlots(String),

    /// The deadline is on or before the scheduling start date.
    #[error("deadline {deadline} is not after start date {start}")]
    DeadlineAlreadyPassed {
        /// Start of the scheduling horizon.
        start: NaiveDate,
        /// The rejected deadline.
        deadline: NaiveDate,
    },
}
