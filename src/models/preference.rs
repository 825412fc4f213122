//! Availability preference models.
//!
//! Describes the user's recurring study constraints: which weekdays are
//! available, which daily time windows, and how long a session may run.
//!
//! # Time Model
//! Time blocks are minutes-of-day (`0..=1439`), recurring on every
//! qualifying date. Concrete dates and clock times appear only in the
//! produced sessions.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A daily recurring availability window.
///
/// `start_minute < end_minute`, both within one day. Blocks keep their
/// configured order, which fixes session ordering within a day (e.g.
/// a morning block before a night block).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Window start, minutes from midnight (inclusive).
    pub start_minute: u16,
    /// Window end, minutes from midnight.
    pub end_minute: u16,
    /// Optional display label ("morning", "night", ...).
    pub label: Option<String>,
}

impl TimeBlock {
    /// Creates a new time block.
    pub fn new(start_minute: u16, end_minute: u16) -> Self {
        Self {
            start_minute,
            end_minute,
            label: None,
        }
    }

    /// Sets a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether two blocks overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Window start as a clock time.
    pub fn start_time(&self) -> NaiveTime {
        minute_to_time(self.start_minute)
    }

    /// Window end as a clock time.
    pub fn end_time(&self) -> NaiveTime {
        minute_to_time(self.end_minute)
    }
}

/// The user's recurring scheduling constraints.
///
/// Weekdays and time blocks select the candidate slots; the session
/// bounds steer the packer. `break_minutes` is carried for consumers
/// that render rest periods between units; it never enters session
/// arithmetic (a session's end time is exactly its start plus the sum
/// of its unit durations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityPreference {
    /// Weekdays available for study, in preference order, no duplicates.
    pub weekdays: Vec<Weekday>,
    /// Daily availability windows, in configured order.
    pub time_blocks: Vec<TimeBlock>,
    /// Soft lower bound on session length (minutes).
    pub min_session_minutes: u32,
    /// Upper bound on session length (minutes). A single oversize unit
    /// group may still exceed it; groups are never split.
    pub max_session_minutes: u32,
    /// Suggested rest between units (minutes), presentation metadata.
    pub break_minutes: u32,
}

impl AvailabilityPreference {
    /// Creates a preference with the given session bounds and no
    /// weekdays or time blocks yet.
    pub fn new(min_session_minutes: u32, max_session_minutes: u32) -> Self {
        Self {
            weekdays: Vec::new(),
            time_blocks: Vec::new(),
            min_session_minutes,
            max_session_minutes,
            break_minutes: 0,
        }
    }

    /// Adds a study weekday. Duplicates are ignored.
    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        if !self.weekdays.contains(&weekday) {
            self.weekdays.push(weekday);
        }
        self
    }

    /// Adds several study weekdays.
    pub fn with_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        for weekday in weekdays {
            self = self.with_weekday(weekday);
        }
        self
    }

    /// Adds a daily time block.
    pub fn with_time_block(mut self, block: TimeBlock) -> Self {
        self.time_blocks.push(block);
        self
    }

    /// Sets the suggested break length.
    pub fn with_break_minutes(mut self, break_minutes: u32) -> Self {
        self.break_minutes = break_minutes;
        self
    }

    /// Whether the given weekday is available for study.
    pub fn allows_weekday(&self, weekday: Weekday) -> bool {
        self.weekdays.contains(&weekday)
    }
}

/// Converts a minute-of-day to a clock time, clamping to 23:59.
fn minute_to_time(minute: u16) -> NaiveTime {
    let m = u32::from(minute.min(1439));
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN)
}
