//! Schedule plan models: sessions, week buckets, plans, and proposals.
//!
//! The [`SchedulePlan`] is the single artifact the rest of the system
//! reads. Downstream consumers copy its dates, times, and group
//! composition verbatim; nothing here is meant to be recomputed by a
//! presentation layer. Summary fields are derived from the session
//! list at assembly, never tracked by separate counters.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::UnitGroup;

/// One concrete, dated, timed study session.
///
/// The end time cannot be supplied: the constructor computes it as the
/// start time plus the exact sum of member durations, so a session with
/// inconsistent arithmetic cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Clock time the session starts.
    pub start_time: NaiveTime,
    /// Clock time the session ends: `start_time` + total minutes.
    pub end_time: NaiveTime,
    groups: Vec<UnitGroup>,
}

impl Session {
    /// Creates a session, deriving the end time from its contents.
    pub(crate) fn new(date: NaiveDate, start_time: NaiveTime, groups: Vec<UnitGroup>) -> Self {
        debug_assert!(!groups.is_empty(), "sessions always hold at least one group");
        let total: u32 = groups.iter().map(UnitGroup::total_duration_minutes).sum();
        // NaiveTime addition wraps past midnight, matching an oversize
        // group spilling over the end of the day.
        let end_time = start_time + Duration::minutes(i64::from(total));
        Self {
            date,
            start_time,
            end_time,
            groups,
        }
    }

    /// Unit groups in this session, in backlog order.
    pub fn groups(&self) -> &[UnitGroup] {
        &self.groups
    }

    /// Total study minutes, recomputed from the member groups.
    pub fn total_minutes(&self) -> u32 {
        self.groups.iter().map(UnitGroup::total_duration_minutes).sum()
    }

    /// Number of individual learning units in this session.
    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(UnitGroup::unit_count).sum()
    }
}

/// Sessions of one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// 1-based, contiguous, strictly increasing across the plan.
    pub week_index: u32,
    /// Sessions ordered by date, then start time.
    pub sessions: Vec<Session>,
}

/// Why a packing attempt fell short of the deadline contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfeasibleReason {
    /// Slots ran out before every unit group was placed.
    PartialSchedule,
    /// Every group was placed but the last session lands on or after
    /// the deadline.
    DeadlineExceeded,
}

/// Outcome of comparing a packing against the deadline.
///
/// Infeasibility is an expected, handled branch of normal operation,
/// not an engine failure; hard input errors live in
/// [`ScheduleError`](crate::error::ScheduleError) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Whether every group was placed strictly before the deadline.
    pub feasible: bool,
    /// Why not, when infeasible.
    pub reason: Option<InfeasibleReason>,
    /// Unit groups left unplaced when slots ran out.
    pub unassigned_groups: usize,
    /// Date of the last produced session, if any.
    pub completion_date: Option<NaiveDate>,
}

/// The final, immutable scheduling artifact.
///
/// All summary fields are computed from the sessions the packer
/// actually produced, so the plan can never disagree with its own
/// summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    weeks: Vec<WeekBucket>,
    total_units_scheduled: usize,
    completion_date: Option<NaiveDate>,
    deadline: NaiveDate,
    feasible: bool,
}

impl SchedulePlan {
    /// Assembles a plan from week buckets. Summary fields are derived
    /// here and nowhere else.
    pub(crate) fn from_weeks(weeks: Vec<WeekBucket>, deadline: NaiveDate, feasible: bool) -> Self {
        let total_units_scheduled = weeks
            .iter()
            .flat_map(|w| w.sessions.iter())
            .map(Session::unit_count)
            .sum();
        let completion_date = weeks
            .last()
            .and_then(|w| w.sessions.last())
            .map(|s| s.date);
        Self {
            weeks,
            total_units_scheduled,
            completion_date,
            deadline,
            feasible,
        }
    }

    /// Week buckets in chronological order.
    pub fn weeks(&self) -> &[WeekBucket] {
        &self.weeks
    }

    /// Number of individual units placed into sessions.
    pub fn total_units_scheduled(&self) -> usize {
        self.total_units_scheduled
    }

    /// Date of the last session, `None` for an empty plan.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.completion_date
    }

    /// The exclusive deadline this plan was built against.
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Whether the plan schedules everything strictly before the deadline.
    pub fn feasible(&self) -> bool {
        self.feasible
    }

    /// All sessions across all weeks, in order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.weeks.iter().flat_map(|w| w.sessions.iter())
    }

    /// Number of sessions in the plan.
    pub fn session_count(&self) -> usize {
        self.weeks.iter().map(|w| w.sessions.len()).sum()
    }

    /// Total scheduled study minutes.
    pub fn total_scheduled_minutes(&self) -> u32 {
        self.sessions().map(Session::total_minutes).sum()
    }

    /// Number of calendar weeks the plan spans.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }
}

/// A feasible plan produced by relaxing exactly one preference dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeProposal {
    /// Human-readable description of the relaxed constraint.
    pub changed_constraint: String,
    /// How many preference dimensions the relaxation touched.
    pub changed_dimensions: u32,
    /// The relaxed preference the plan was built with.
    pub preference: super::AvailabilityPreference,
    /// The resulting feasible plan.
    pub plan: SchedulePlan,
}

impl AlternativeProposal {
    /// Completion date of the resulting plan.
    ///
    /// Always strictly before the deadline; infeasible candidates are
    /// discarded before a proposal is built.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.plan.completion_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LearningUnit;

    fn group(id: &str, minutes: u32) -> UnitGroup {
        UnitGroup::from_units(vec![LearningUnit::new(id, format!("Unit {id}"), minutes)])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_session_end_time_derived() {
        let session = Session::new(
            date(2026, 3, 2),
            time(8, 0),
            vec![group("1", 18), group("2", 23)],
        );
        assert_eq!(session.end_time, time(8, 41));
        assert_eq!(session.total_minutes(), 41);
        assert_eq!(session.unit_count(), 2);
    }

    #[test]
    fn test_session_wraps_past_midnight() {
        let session = Session::new(date(2026, 3, 2), time(23, 30), vec![group("1", 45)]);
        assert_eq!(session.end_time, time(0, 15));
    }

    #[test]
    fn test_plan_summary_derived_from_sessions() {
        let s1 = Session::new(date(2026, 3, 2), time(8, 0), vec![group("1", 40)]);
        let s2 = Session::new(date(2026, 3, 9), time(8, 0), vec![group("2", 30)]);
        let plan = SchedulePlan::from_weeks(
            vec![
                WeekBucket { week_index: 1, sessions: vec![s1] },
                WeekBucket { week_index: 2, sessions: vec![s2] },
            ],
            date(2026, 3, 23),
            true,
        );

        assert_eq!(plan.total_units_scheduled(), 2);
        assert_eq!(plan.completion_date(), Some(date(2026, 3, 9)));
        assert_eq!(plan.session_count(), 2);
        assert_eq!(plan.total_scheduled_minutes(), 70);
        assert_eq!(plan.week_count(), 2);
        assert!(plan.feasible());
    }

    #[test]
    fn test_empty_plan() {
        let plan = SchedulePlan::from_weeks(Vec::new(), date(2026, 3, 23), false);
        assert_eq!(plan.total_units_scheduled(), 0);
        assert_eq!(plan.completion_date(), None);
        assert_eq!(plan.week_count(), 0);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let s1 = Session::new(date(2026, 3, 2), time(8, 0), vec![group("1", 41)]);
        let plan = SchedulePlan::from_weeks(
            vec![WeekBucket { week_index: 1, sessions: vec![s1] }],
            date(2026, 3, 23),
            true,
        );
        let json = serde_json::to_string(&plan).unwrap();
        let back: SchedulePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
