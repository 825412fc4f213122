//! Deterministic study-plan scheduling engine.
//!
//! Turns a backlog of learning units, a weekly availability preference,
//! and a deadline into a concrete calendar of study sessions — or, when
//! the backlog cannot fit, a best-effort plan plus ranked constraint
//! relaxations that would make it fit. The engine is a pure function:
//! no clock reads, no randomness, no I/O. Two identical requests always
//! produce byte-identical plans.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `LearningUnit`, `UnitGroup`,
//!   `AvailabilityPreference`, `TimeBlock`, `HolidayTable`, `Session`,
//!   `SchedulePlan`, `AlternativeProposal`
//! - **`scheduler`**: The pipeline — grouping, slot generation, greedy
//!   packing, feasibility, week assembly, alternative proposals
//! - **`validation`**: Input integrity checks (duplicate IDs, zero
//!   durations, degenerate time blocks)
//! - **`error`**: Hard input errors; infeasibility is an outcome, not
//!   an error
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use studyplan::models::{AvailabilityPreference, LearningUnit, TimeBlock};
//! use studyplan::scheduler::{ScheduleRequest, Scheduler};
//!
//! let backlog = vec![
//!     LearningUnit::new("1", "Present tense", 30),
//!     LearningUnit::new("2", "Past tense", 30),
//!     LearningUnit::new("2.1", "Past tense drills", 15),
//!     LearningUnit::new("3", "Future tense", 30),
//! ];
//! let preference = AvailabilityPreference::new(20, 60)
//!     .with_weekday(Weekday::Mon)
//!     .with_weekday(Weekday::Thu)
//!     .with_time_block(TimeBlock::new(19 * 60, 21 * 60).with_label("evening"));
//!
//! let request = ScheduleRequest::new(
//!     backlog,
//!     preference,
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
//! );
//!
//! let outcome = Scheduler::new().schedule(&request).unwrap();
//! assert!(outcome.is_feasible());
//! // Units 2 and 2.1 always share a session.
//! assert_eq!(outcome.plan().total_units_scheduled(), 4);
//! ```

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use scheduler::{ScheduleOutcome, ScheduleRequest, Scheduler};
