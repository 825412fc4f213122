//! Greedy session packer.
//!
//! Assigns unit groups to candidate slots in a single chronological
//! pass, producing concrete sessions with exact start and end times.
//!
//! # Algorithm
//! 1. Keep a cursor over the groups (never reordered) and walk the
//!    slots in order.
//! 2. For the current slot, accumulate consecutive unassigned groups
//!    while the running total plus the next group fits within
//!    `max_session_minutes`.
//! 3. A group whose duration alone exceeds the maximum is still placed
//!    alone in the current slot. Groups are never split; the maximum
//!    yields to atomicity.
//! 4. Stop when groups or slots run out. Leftover groups are reported
//!    to the feasibility evaluator, not treated as an error here.
//!
//! The minimum session length is a soft preference: the tail of the
//! backlog may produce a final session shorter than the minimum.
//!
//! # Complexity
//! O(groups + slots consumed).

use crate::models::{AvailabilityPreference, Session, UnitGroup};

use super::slots::Slot;

/// Result of a packing pass.
#[derive(Debug, Clone)]
pub struct Packing {
    /// Produced sessions, chronological.
    pub sessions: Vec<Session>,
    /// Groups left over after slots ran out, in backlog order.
    pub unassigned: Vec<UnitGroup>,
}

/// Packs unit groups into slots, greedily and in order.
pub fn pack(
    groups: Vec<UnitGroup>,
    slots: impl Iterator<Item = Slot>,
    preference: &AvailabilityPreference,
) -> Packing {
    let mut sessions = Vec::new();
    let mut remaining = groups.into_iter().peekable();

    for slot in slots {
        if remaining.peek().is_none() {
            break;
        }

        let mut members: Vec<UnitGroup> = Vec::new();
        let mut total: u32 = 0;

        loop {
            let fits = match remaining.peek() {
                // The first group always goes in, even when it alone
                // exceeds the maximum: groups travel together.
                Some(group) => {
                    members.is_empty()
                        || total + group.total_duration_minutes() <= preference.max_session_minutes
                }
                None => false,
            };
            if !fits {
                break;
            }
            if let Some(group) = remaining.next() {
                total += group.total_duration_minutes();
                members.push(group);
            }
        }

        if !members.is_empty() {
            sessions.push(Session::new(slot.date, slot.block.start_time(), members));
        }
    }

    Packing {
        sessions,
        unassigned: remaining.collect(),
    }
}
