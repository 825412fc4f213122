//! Deterministic scheduling engine.
//!
//! # Pipeline
//!
//! 1. Resolve the holiday calendar for the request's region and years.
//! 2. Normalize the backlog into atomic unit groups.
//! 3. Generate candidate slots in strict chronological order.
//! 4. Pack groups greedily into sessions.
//! 5. Evaluate feasibility against the deadline.
//! 6. Assemble week buckets; on infeasibility, propose alternatives.
//!
//! The engine is a pure function of its request: the same request and
//! holiday table always produce the same outcome, byte for byte.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::ScheduleError;
use crate::models::{
    AlternativeProposal, AvailabilityPreference, HolidayTable, InfeasibleReason, LearningUnit,
    SchedulePlan,
};

use super::{alternatives, assembler, feasibility, grouping, packer, slots::SlotIter};

/// Default holiday region when a request does not name one.
const DEFAULT_REGION: &str = "ES";

/// Default cap on the number of alternative proposals produced.
const DEFAULT_MAX_PROPOSALS: usize = 3;

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Learning units still to study, in pedagogical order.
    pub backlog: Vec<LearningUnit>,
    /// Weekly availability and session sizing.
    pub preference: AvailabilityPreference,
    /// First day eligible for scheduling.
    pub today: NaiveDate,
    /// Exclusive completion bound.
    pub deadline: NaiveDate,
    /// Holiday region key.
    pub region: String,
}

impl ScheduleRequest {
    /// Creates a request with the default region.
    pub fn new(
        backlog: Vec<LearningUnit>,
        preference: AvailabilityPreference,
        today: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            backlog,
            preference,
            today,
            deadline,
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Sets the holiday region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

/// Result of a scheduling run.
///
/// Infeasibility is an outcome, not an error: the engine still returns
/// its best partial plan together with ranked relaxation proposals.
#[derive(Debug, Clone)]
pub enum ScheduleOutcome {
    /// Every unit group fits strictly before the deadline.
    Feasible(SchedulePlan),
    /// The backlog does not fit under the given preference.
    Infeasible {
        /// Best-effort plan under the original preference.
        plan: SchedulePlan,
        /// Why the packing fell short.
        reason: InfeasibleReason,
        /// Ranked feasible relaxations; empty if none exists.
        alternatives: Vec<AlternativeProposal>,
    },
}

impl ScheduleOutcome {
    /// Whether the outcome met the deadline under the original
    /// preference.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// The plan built under the original preference, feasible or not.
    pub fn plan(&self) -> &SchedulePlan {
        match self {
            Self::Feasible(plan) => plan,
            Self::Infeasible { plan, .. } => plan,
        }
    }
}

/// Deterministic greedy study-plan scheduler.
#[derive(Debug, Clone)]
pub struct Scheduler {
    holidays: HolidayTable,
    max_proposals: usize,
}

impl Scheduler {
    /// Creates a scheduler with the builtin holiday table.
    pub fn new() -> Self {
        Self {
            holidays: HolidayTable::builtin(),
            max_proposals: DEFAULT_MAX_PROPOSALS,
        }
    }

    /// Replaces the holiday table.
    pub fn with_holiday_table(mut self, holidays: HolidayTable) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the cap on alternative proposals.
    pub fn with_max_proposals(mut self, max_proposals: usize) -> Self {
        self.max_proposals = max_proposals;
        self
    }

    /// Runs the full pipeline for one request.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::DeadlineAlreadyPassed`] when the deadline is
    ///   not strictly after `today`.
    /// - [`ScheduleError::UnknownRegion`] when the region is absent
    ///   from the holiday table.
    /// - [`ScheduleError::NoAvailableSlots`] when the preference has no
    ///   weekdays or no time blocks.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleOutcome, ScheduleError> {
        if request.deadline <= request.today {
            return Err(ScheduleError::DeadlineAlreadyPassed {
                start: request.today,
                deadline: request.deadline,
            });
        }

        let calendar = self
            .holidays
            .resolve(&request.region, request.today.year()..=request.deadline.year())?;

        let groups = grouping::normalize(&request.backlog);
        debug!(
            units = request.backlog.len(),
            groups = groups.len(),
            "normalized backlog"
        );

        let slots = SlotIter::new(request.today, request.deadline, &request.preference, &calendar)?;
        let packing = packer::pack(groups.clone(), slots, &request.preference);
        let result = feasibility::evaluate(&packing, request.deadline);

        let plan = assembler::assemble(packing.sessions, request.deadline, result.feasible);

        if result.feasible {
            info!(
                sessions = plan.session_count(),
                weeks = plan.week_count(),
                completion = ?plan.completion_date(),
                "schedule is feasible"
            );
            return Ok(ScheduleOutcome::Feasible(plan));
        }

        let reason = result
            .reason
            .unwrap_or(InfeasibleReason::PartialSchedule);
        warn!(
            ?reason,
            unassigned = result.unassigned_groups,
            "schedule is infeasible, generating alternatives"
        );

        let alternatives = alternatives::propose(
            &request.preference,
            &groups,
            request.today,
            request.deadline,
            &calendar,
            self.max_proposals,
        );

        Ok(ScheduleOutcome::Infeasible {
            plan,
            reason,
            alternatives,
        })
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
