//! Schedule plan assembly.
//!
//! Groups packed sessions into contiguous week buckets and emits the
//! final immutable [`SchedulePlan`]. Totals and the completion date are
//! counted from the sessions actually produced, never from a separately
//! tracked counter, so the plan cannot drift from its own summary.

use chrono::{Datelike, NaiveDate};

use crate::models::{SchedulePlan, Session, WeekBucket};

/// Buckets sessions by calendar (ISO) week and assembles the plan.
///
/// Week indices are 1-based and assigned in order of first appearance,
/// so they stay contiguous even when an empty calendar week sits
/// between two sessions.
pub fn assemble(sessions: Vec<Session>, deadline: NaiveDate, feasible: bool) -> SchedulePlan {
    let mut weeks: Vec<WeekBucket> = Vec::new();
    let mut current_week: Option<(i32, u32)> = None;

    for session in sessions {
        let iso = session.date.iso_week();
        let key = (iso.year(), iso.week());
        if current_week != Some(key) {
            current_week = Some(key);
            weeks.push(WeekBucket {
                week_index: weeks.len() as u32 + 1,
                sessions: Vec::new(),
            });
        }
        if let Some(bucket) = weeks.last_mut() {
            bucket.sessions.push(session);
        }
    }

    SchedulePlan::from_weeks(weeks, deadline, feasible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};

    use crate::models::{AvailabilityPreference, HolidayCalendar, LearningUnit, TimeBlock};
    use crate::scheduler::{normalize, pack, SlotIter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sessions_for(unit_minutes: &[u32]) -> Vec<Session> {
        let units: Vec<LearningUnit> = unit_minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| LearningUnit::new(format!("{}", i + 1), format!("Unit {}", i + 1), m))
            .collect();
        let pref = AvailabilityPreference::new(20, 45)
            .with_weekday(Weekday::Mon)
            .with_weekday(Weekday::Thu)
            .with_time_block(TimeBlock::new(480, 1439));
        let calendar = HolidayCalendar::empty();
        let slots =
            SlotIter::new(date(2026, 3, 2), date(2026, 4, 27), &pref, &calendar).unwrap();
        pack(normalize(&units), slots, &pref).sessions
    }

    #[test]
    fn test_sessions_bucketed_by_week() {
        // Four 40-minute groups on Mon/Thu: two sessions per ISO week.
        let sessions = sessions_for(&[40, 40, 40, 40]);
        let plan = assemble(sessions, date(2026, 4, 27), true);

        assert_eq!(plan.week_count(), 2);
        assert_eq!(plan.weeks()[0].week_index, 1);
        assert_eq!(plan.weeks()[1].week_index, 2);
        assert_eq!(plan.weeks()[0].sessions.len(), 2);
        assert_eq!(plan.weeks()[1].sessions.len(), 2);
    }

    #[test]
    fn test_completion_date_is_last_session() {
        let sessions = sessions_for(&[40, 40, 40]);
        let last = sessions.last().unwrap().date;
        let plan = assemble(sessions, date(2026, 4, 27), true);

        assert_eq!(plan.completion_date(), Some(last));
        assert_eq!(plan.completion_date(), Some(date(2026, 3, 9)));
    }

    #[test]
    fn test_totals_counted_from_sessions() {
        let sessions = sessions_for(&[40, 40, 40]);
        let plan = assemble(sessions, date(2026, 4, 27), true);

        assert_eq!(plan.total_units_scheduled(), 3);
        assert_eq!(plan.session_count(), 3);
        assert_eq!(plan.total_scheduled_minutes(), 120);
    }

    #[test]
    fn test_chronological_order_preserved() {
        let sessions = sessions_for(&[40, 40, 40, 40]);
        let plan = assemble(sessions, date(2026, 4, 27), true);

        let mut prev: Option<(NaiveDate, NaiveTime)> = None;
        for session in plan.sessions() {
            let key = (session.date, session.start_time);
            if let Some(p) = prev {
                assert!(key > p);
            }
            prev = Some(key);
        }
    }

    #[test]
    fn test_empty_sessions_make_empty_plan() {
        let plan = assemble(Vec::new(), date(2026, 4, 27), false);
        assert_eq!(plan.week_count(), 0);
        assert_eq!(plan.completion_date(), None);
        assert!(!plan.feasible());
    }
}
