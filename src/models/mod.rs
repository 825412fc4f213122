//! Study-plan scheduling domain models.
//!
//! Provides the core data types for a scheduling request and its
//! produced plan. All entities are created fresh per request and are
//! immutable once produced; the engine is a pure function from
//! (backlog, preference, deadline, region, today) to a plan.
//!
//! # Type-level invariants
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | Unit groups are atomic | [`UnitGroup`] only constructed by the normalizer |
//! | End time is exact arithmetic | [`Session`] computes it, never accepts it |
//! | Summary never drifts | [`SchedulePlan`] derives totals from its sessions |
//! | Deadline is exclusive | slot generation stops the day before |

mod holiday;
mod plan;
mod preference;
mod unit;

pub use holiday::{HolidayCalendar, HolidayRule, HolidayRuleKind, HolidayTable};
pub use plan::{
    AlternativeProposal, FeasibilityResult, InfeasibleReason, SchedulePlan, Session, WeekBucket,
};
pub use preference::{AvailabilityPreference, TimeBlock};
pub use unit::{LearningUnit, UnitGroup};
