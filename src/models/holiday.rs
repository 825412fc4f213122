//! Holiday rules and calendar resolution.
//!
//! Holiday rules are recurring: a fixed month/day, or the Nth weekday of
//! a month ("first Monday of February"). A [`HolidayTable`] maps region
//! identifiers to rule sets and is injected configuration — adding a
//! region is a data change, not a logic change. Resolution expands
//! rules into a concrete, immutable [`HolidayCalendar`] for a year
//! range.
//!
//! # Precedence
//! Holiday dates remove candidate slots entirely; overlapping rules for
//! the same date collapse to one excluded entry.

use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// How a rule selects its day within the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolidayRuleKind {
    /// A fixed day of the month (e.g. December 25).
    FixedDay(u32),
    /// The Nth occurrence of a weekday (1-based ordinal).
    NthWeekday { weekday: Weekday, ordinal: u8 },
}

/// One recurring holiday rule, deterministic given a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// Holiday name, for diagnostics only.
    pub name: String,
    /// Month (1-12).
    pub month: u32,
    /// Day selection within the month.
    pub kind: HolidayRuleKind,
}

impl HolidayRule {
    /// Creates a fixed-date rule.
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            name: name.into(),
            month,
            kind: HolidayRuleKind::FixedDay(day),
        }
    }

    /// Creates an Nth-weekday-of-month rule.
    pub fn nth_weekday(name: impl Into<String>, month: u32, weekday: Weekday, ordinal: u8) -> Self {
        Self {
            name: name.into(),
            month,
            kind: HolidayRuleKind::NthWeekday { weekday, ordinal },
        }
    }

    /// Resolves this rule to a concrete date in the given year.
    ///
    /// Returns `None` when the rule does not land in the year (e.g.
    /// February 30, or a fifth occurrence that does not exist).
    pub fn resolve_for_year(&self, year: i32) -> Option<NaiveDate> {
        match self.kind {
            HolidayRuleKind::FixedDay(day) => NaiveDate::from_ymd_opt(year, self.month, day),
            HolidayRuleKind::NthWeekday { weekday, ordinal } => {
                let mut seen: u8 = 0;
                let mut date = NaiveDate::from_ymd_opt(year, self.month, 1)?;
                while date.month() == self.month {
                    if date.weekday() == weekday {
                        seen += 1;
                        if seen == ordinal {
                            return Some(date);
                        }
                    }
                    date = date.succ_opt()?;
                }
                None
            }
        }
    }
}

/// Region-keyed holiday configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayTable {
    regions: HashMap<String, Vec<HolidayRule>>,
}

impl HolidayTable {
    /// Creates an empty table (every region unknown).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table shipped with the engine.
    ///
    /// Carries the Spanish national calendar (`"ES"`) and the United
    /// States federal calendar (`"US"`); both are plain data and can be
    /// replaced wholesale via [`HolidayTable::with_region`].
    pub fn builtin() -> Self {
        Self::new()
            .with_region(
                "ES",
                vec![
                    HolidayRule::fixed("Año Nuevo", 1, 1),
                    HolidayRule::fixed("Epifanía del Señor", 1, 6),
                    HolidayRule::fixed("Fiesta del Trabajo", 5, 1),
                    HolidayRule::fixed("Asunción de la Virgen", 8, 15),
                    HolidayRule::fixed("Fiesta Nacional de España", 10, 12),
                    HolidayRule::fixed("Todos los Santos", 11, 1),
                    HolidayRule::fixed("Día de la Constitución", 12, 6),
                    HolidayRule::fixed("Inmaculada Concepción", 12, 8),
                    HolidayRule::fixed("Navidad", 12, 25),
                ],
            )
            .with_region(
                "US",
                vec![
                    HolidayRule::fixed("New Year's Day", 1, 1),
                    HolidayRule::nth_weekday("Martin Luther King Jr. Day", 1, Weekday::Mon, 3),
                    HolidayRule::nth_weekday("Presidents' Day", 2, Weekday::Mon, 3),
                    HolidayRule::fixed("Independence Day", 7, 4),
                    HolidayRule::nth_weekday("Labor Day", 9, Weekday::Mon, 1),
                    HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thu, 4),
                    HolidayRule::fixed("Christmas Day", 12, 25),
                ],
            )
    }

    /// Adds or replaces a region's rule set.
    pub fn with_region(mut self, region: impl Into<String>, rules: Vec<HolidayRule>) -> Self {
        self.regions.insert(region.into(), rules);
        self
    }

    /// Whether the region is configured.
    pub fn has_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Expands a region's rules over an inclusive year range.
    ///
    /// Duplicate dates across overlapping rules collapse to one entry.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownRegion`] when the region is not configured.
    pub fn resolve(
        &self,
        region: &str,
        years: RangeInclusive<i32>,
    ) -> Result<HolidayCalendar, ScheduleError> {
        let rules = self
            .regions
            .get(region)
            .ok_or_else(|| ScheduleError::UnknownRegion(region.to_string()))?;

        let mut dates = BTreeSet::new();
        for year in years {
            for rule in rules {
                if let Some(date) = rule.resolve_for_year(year) {
                    dates.insert(date);
                }
            }
        }
        Ok(HolidayCalendar { dates })
    }
}

/// Resolved holiday dates for a year range. Immutable once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// A calendar excluding nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the date is an excluded holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of excluded dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the calendar excludes no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Excluded dates in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}
