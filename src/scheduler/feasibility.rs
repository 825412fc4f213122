//! Feasibility evaluation.
//!
//! A packing is feasible iff every unit group was placed AND the last
//! session's date is strictly earlier than the deadline. Both
//! conditions are required: a plan that fits everything in but finishes
//! on or after the deadline is infeasible, as is a plan that respects
//! the deadline but leaves groups unplaced because slots ran out.

use chrono::NaiveDate;

use crate::models::{FeasibilityResult, InfeasibleReason};

use super::packer::Packing;

/// Classifies a packing against the exclusive deadline.
pub fn evaluate(packing: &Packing, deadline: NaiveDate) -> FeasibilityResult {
    let completion_date = packing.sessions.last().map(|s| s.date);
    let unassigned_groups = packing.unassigned.len();

    if unassigned_groups > 0 {
        return FeasibilityResult {
            feasible: false,
            reason: Some(InfeasibleReason::PartialSchedule),
            unassigned_groups,
            completion_date,
        };
    }

    // Nothing to schedule is trivially feasible.
    let within_deadline = completion_date.map(|d| d < deadline).unwrap_or(true);
    if within_deadline {
        FeasibilityResult {
            feasible: true,
            reason: None,
            unassigned_groups: 0,
            completion_date,
        }
    } else {
        FeasibilityResult {
            feasible: false,
            reason: Some(InfeasibleReason::DeadlineExceeded),
            unassigned_groups: 0,
            completion_date,
        }
    }
}
