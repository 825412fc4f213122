//! Alternative proposal generation.
//!
//! When a packing is infeasible, re-runs slot generation, packing, and
//! feasibility under systematically widened constraints and keeps the
//! candidates that become feasible. Each candidate relaxes a single
//! preference dimension:
//!
//! 1. One additional weekday, keeping the existing time blocks.
//! 2. Weekend study days, keeping the configured weekdays unchanged.
//! 3. A longer maximum session length (+20 minutes).
//!
//! Feasible candidates are ranked by fewest changed dimensions, then by
//! earliest completion date; ties keep generation order. An empty
//! result means no evaluated relaxation meets the deadline — the caller
//! must surface that rather than fabricate a plan.

use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::models::{AlternativeProposal, AvailabilityPreference, HolidayCalendar, UnitGroup};

use super::{assembler, feasibility, packer, slots::SlotIter};

/// How much a session-length relaxation widens the maximum, in minutes.
const MAX_SESSION_STEP: u32 = 20;

/// Weekdays eligible for the extra-weekday relaxation, in tie order.
const WORKWEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Generates ranked feasible relaxations of an infeasible preference.
pub fn propose(
    original: &AvailabilityPreference,
    groups: &[UnitGroup],
    start: NaiveDate,
    deadline: NaiveDate,
    calendar: &HolidayCalendar,
    max_proposals: usize,
) -> Vec<AlternativeProposal> {
    let mut proposals = Vec::new();

    for (changed_dimensions, changed_constraint, candidate) in candidates(original) {
        let slots = match SlotIter::new(start, deadline, &candidate, calendar) {
            Ok(slots) => slots,
            Err(_) => continue,
        };
        let packing = packer::pack(groups.to_vec(), slots, &candidate);
        let result = feasibility::evaluate(&packing, deadline);
        if !result.feasible {
            continue;
        }
        debug!(constraint = %changed_constraint, "relaxation candidate is feasible");
        proposals.push(AlternativeProposal {
            changed_constraint,
            changed_dimensions,
            preference: candidate,
            plan: assembler::assemble(packing.sessions, deadline, true),
        });
    }

    proposals.sort_by_key(|p| {
        (
            p.changed_dimensions,
            p.completion_date().unwrap_or(deadline),
        )
    });
    proposals.truncate(max_proposals);
    proposals
}

/// Enumerates the single-dimension relaxation candidates.
fn candidates(
    original: &AvailabilityPreference,
) -> Vec<(u32, String, AvailabilityPreference)> {
    let mut out = Vec::new();

    // 1. One extra workweek day, with the existing time blocks.
    for weekday in WORKWEEK {
        if !original.allows_weekday(weekday) {
            let candidate = original.clone().with_weekday(weekday);
            out.push((
                1,
                format!("add {} as a study day", weekday_name(weekday)),
                candidate,
            ));
        }
    }

    // 2. Weekend days, weekday selection otherwise unchanged.
    let missing_weekend: Vec<Weekday> = [Weekday::Sat, Weekday::Sun]
        .into_iter()
        .filter(|&d| !original.allows_weekday(d))
        .collect();
    if !missing_weekend.is_empty() {
        let candidate = original.clone().with_weekdays(missing_weekend);
        out.push((1, "add weekend study days".to_string(), candidate));
    }

    // 3. Longer sessions on the same days.
    let mut candidate = original.clone();
    candidate.max_session_minutes += MAX_SESSION_STEP;
    out.push((
        1,
        format!(
            "extend the maximum session length to {} minutes",
            candidate.max_session_minutes
        ),
        candidate,
    ));

    out
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
