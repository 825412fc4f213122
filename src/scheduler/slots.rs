//! Availability slot generation.
//!
//! Expands a preference over a date range into the ordered sequence of
//! candidate session slots: every date in `[start, deadline)` whose
//! weekday is preferred and which is not a holiday, with one slot per
//! configured time block, in block order.
//!
//! The deadline is an exclusive bound baked into the iterator itself:
//! the last date a slot can fall on is the day before the deadline, and
//! no caller-side comparison convention can reintroduce the off-by-one.

use chrono::{Datelike, NaiveDate};

use crate::error::ScheduleError;
use crate::models::{AvailabilityPreference, HolidayCalendar, TimeBlock};

/// A candidate (date, time window) pair eligible to host a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// The availability window on that date.
    pub block: TimeBlock,
}

/// Lazy, finite iterator over candidate slots in chronological order.
///
/// Within a qualifying date, slots follow the configured block order,
/// which fixes session ordering within a day (morning before night if
/// configured that way).
#[derive(Debug, Clone)]
pub struct SlotIter<'a> {
    current: NaiveDate,
    deadline: NaiveDate,
    preference: &'a AvailabilityPreference,
    calendar: &'a HolidayCalendar,
    block_index: usize,
}

impl<'a> SlotIter<'a> {
    /// Creates the slot sequence for `[start, deadline)`.
    ///
    /// # Errors
    /// [`ScheduleError::NoAvailableSlots`] before anything is emitted
    /// when the preference has no weekdays or no time blocks.
    pub fn new(
        start: NaiveDate,
        deadline: NaiveDate,
        preference: &'a AvailabilityPreference,
        calendar: &'a HolidayCalendar,
    ) -> Result<Self, ScheduleError> {
        if preference.weekdays.is_empty() {
            return Err(ScheduleError::NoAvailableSlots(
                "preference selects no weekdays".to_string(),
            ));
        }
        if preference.time_blocks.is_empty() {
            return Err(ScheduleError::NoAvailableSlots(
                "preference has no time blocks".to_string(),
            ));
        }
        Ok(Self {
            current: start,
            deadline,
            preference,
            calendar,
            block_index: 0,
        })
    }
}

impl Iterator for SlotIter<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        loop {
            if self.current >= self.deadline {
                return None;
            }

            let qualifies = self.preference.allows_weekday(self.current.weekday())
                && !self.calendar.contains(self.current);

            if qualifies && self.block_index < self.preference.time_blocks.len() {
                let slot = Slot {
                    date: self.current,
                    block: self.preference.time_blocks[self.block_index].clone(),
                };
                self.block_index += 1;
                return Some(slot);
            }

            self.block_index = 0;
            self.current = self.current.succ_opt()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    use crate::models::HolidayTable;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mondays_morning() -> AvailabilityPreference {
        AvailabilityPreference::new(20, 45)
            .with_weekday(Weekday::Mon)
            .with_time_block(TimeBlock::new(480, 1439))
    }

    #[test]
    fn test_slots_only_on_preferred_weekdays() {
        let pref = mondays_morning();
        let calendar = HolidayCalendar::empty();
        // 2026-03-02 is a Monday.
        let slots: Vec<Slot> =
            SlotIter::new(date(2026, 3, 2), date(2026, 3, 23), &pref, &calendar)
                .unwrap()
                .collect();

        let dates: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 3, 2), date(2026, 3, 9), date(2026, 3, 16)]
        );
    }

    #[test]
    fn test_deadline_date_excluded() {
        // Deadline on a Monday: that Monday must not yield a slot.
        let pref = mondays_morning();
        let calendar = HolidayCalendar::empty();
        let slots: Vec<Slot> =
            SlotIter::new(date(2026, 3, 2), date(2026, 3, 16), &pref, &calendar)
                .unwrap()
                .collect();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots.last().unwrap().date, date(2026, 3, 9));
    }

    #[test]
    fn test_holiday_dates_removed() {
        let pref = mondays_morning();
        let table = HolidayTable::new().with_region(
            "test",
            vec![crate::models::HolidayRule::fixed("holiday", 3, 2)],
        );
        let calendar = table.resolve("test", 2026..=2026).unwrap();

        let slots: Vec<Slot> =
            SlotIter::new(date(2026, 3, 2), date(2026, 3, 23), &pref, &calendar)
                .unwrap()
                .collect();

        let dates: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![date(2026, 3, 9), date(2026, 3, 16)]);
    }

    #[test]
    fn test_block_order_within_day() {
        let pref = AvailabilityPreference::new(20, 45)
            .with_weekday(Weekday::Mon)
            .with_time_block(TimeBlock::new(480, 600).with_label("morning"))
            .with_time_block(TimeBlock::new(1200, 1380).with_label("night"));
        let calendar = HolidayCalendar::empty();

        let slots: Vec<Slot> =
            SlotIter::new(date(2026, 3, 2), date(2026, 3, 9), &pref, &calendar)
                .unwrap()
                .collect();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].block.label.as_deref(), Some("morning"));
        assert_eq!(slots[1].block.label.as_deref(), Some("night"));
        assert_eq!(slots[0].date, slots[1].date);
    }

    #[test]
    fn test_empty_weekdays_fails_before_emitting() {
        let pref = AvailabilityPreference::new(20, 45).with_time_block(TimeBlock::new(480, 600));
        let calendar = HolidayCalendar::empty();
        let err = SlotIter::new(date(2026, 3, 2), date(2026, 3, 23), &pref, &calendar)
            .err()
            .unwrap();
        assert!(matches!(err, ScheduleError::NoAvailableSlots(_)));
    }

    #[test]
    fn test_empty_time_blocks_fails_before_emitting() {
        let pref = AvailabilityPreference::new(20, 45).with_weekday(Weekday::Mon);
        let calendar = HolidayCalendar::empty();
        let err = SlotIter::new(date(2026, 3, 2), date(2026, 3, 23), &pref, &calendar)
            .err()
            .unwrap();
        assert!(matches!(err, ScheduleError::NoAvailableSlots(_)));
    }

    #[test]
    fn test_start_after_deadline_yields_nothing() {
        let pref = mondays_morning();
        let calendar = HolidayCalendar::empty();
        let mut iter =
            SlotIter::new(date(2026, 3, 23), date(2026, 3, 2), &pref, &calendar).unwrap();
        assert!(iter.next().is_none());
    }
}
