//! Learning unit and unit group models.
//!
//! A learning unit is one indivisible piece of source content with a
//! fixed title and an exact duration in minutes. Units whose identifiers
//! share the same integer component (`"3"` and `"3.1"`) are numbered
//! continuations of one another and must always be scheduled together;
//! the grouping normalizer merges them into a [`UnitGroup`].
//!
//! # Invariants
//! - Titles and durations pass through the engine verbatim. Nothing is
//!   synthesized, renamed, or rounded.
//! - A `UnitGroup` is never empty and is only constructed by the
//!   normalizer, so a group cannot exist in a partially-merged state.
//! - A group's total duration is always recomputed from its members,
//!   never stored separately.

use serde::{Deserialize, Serialize};

/// One piece of learning content.
///
/// The identifier carries the unit numbering (`"1"`, `"3.1"`, ...).
/// Title and duration are copied from the backlog that feeds the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningUnit {
    /// Unit identifier, e.g. `"3"` or `"3.1"`.
    pub id: String,
    /// Exact title, opaque to the engine.
    pub title: String,
    /// Exact duration in minutes (positive).
    pub duration_minutes: u32,
}

impl LearningUnit {
    /// Creates a new learning unit.
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
        }
    }

    /// The integer component of the identifier.
    ///
    /// `"3"` and `"3.1"` both yield `"3"`. Units sharing a group key
    /// form one indivisible scheduling item.
    pub fn group_key(&self) -> &str {
        self.id.split('.').next().unwrap_or(self.id.as_str())
    }
}

/// One or more learning units that travel together through scheduling.
///
/// A base unit and its decimal continuations (`3`, `3.1`, `3.2`) are one
/// group. Groups are atomic: the packer places a whole group into a
/// single session or not at all.
///
/// Groups cannot be constructed directly; use
/// [`normalize`](crate::scheduler::normalize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitGroup {
    units: Vec<LearningUnit>,
}

impl UnitGroup {
    /// Creates a group from already-merged units.
    ///
    /// Callers must guarantee `units` is non-empty and ordered as in
    /// the backlog; the normalizer is the only production caller.
    pub(crate) fn from_units(units: Vec<LearningUnit>) -> Self {
        debug_assert!(!units.is_empty(), "unit groups are never empty");
        Self { units }
    }

    /// Member units in backlog order.
    pub fn units(&self) -> &[LearningUnit] {
        &self.units
    }

    /// Group key shared by every member.
    pub fn group_key(&self) -> &str {
        self.units.first().map(LearningUnit::group_key).unwrap_or("")
    }

    /// Combined duration of all members (minutes).
    ///
    /// Recomputed on every call; there is no stored total to drift.
    pub fn total_duration_minutes(&self) -> u32 {
        self.units.iter().map(|u| u.duration_minutes).sum()
    }

    /// Number of member units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}
