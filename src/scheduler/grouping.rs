//! Unit grouping normalizer.
//!
//! Merges a flat backlog of learning units into atomic unit groups: a
//! unit and its decimal continuations (`3`, `3.1`, `3.2`) become one
//! indivisible group with a combined duration.
//!
//! # Guarantees
//! - Backlog order is authoritative: groups appear in order of first
//!   appearance, never re-sorted by title or duration.
//! - Merging is keyed, not positional: continuations are merged even
//!   when they are not adjacent in the backlog.
//! - Total work is conserved: the summed group durations equal the
//!   summed unit durations exactly.
//! - No unit lands in more than one group; no group is empty.

use std::collections::HashMap;

use crate::models::{LearningUnit, UnitGroup};

/// Merges the backlog into ordered, atomic unit groups.
///
/// Walks the backlog once in the order it was supplied, indexing units
/// by their group key (the integer component of the identifier).
pub fn normalize(units: &[LearningUnit]) -> Vec<UnitGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<LearningUnit>> = HashMap::new();

    for unit in units {
        let key = unit.group_key();
        if !members.contains_key(key) {
            order.push(key);
        }
        members.entry(key).or_default().push(unit.clone());
    }

    order
        .into_iter()
        .filter_map(|key| members.remove(key))
        .map(UnitGroup::from_units)
        .collect()
}
