//! Deterministic greedy study-plan scheduling.
//!
//! The pipeline stages live in their own modules and compose in
//! [`engine`]:
//!
//! | Stage | Module | Responsibility |
//! |-------|--------|----------------|
//! | 1 | [`grouping`] | Merge decimal follow-ups into atomic unit groups |
//! | 2 | [`slots`] | Enumerate candidate slots in chronological order |
//! | 3 | [`packer`] | Fill slots greedily without splitting groups |
//! | 4 | [`feasibility`] | Judge the packing against the deadline |
//! | 5 | [`assembler`] | Bucket sessions into ISO weeks |
//! | 6 | [`alternatives`] | Propose constraint relaxations on infeasibility |
//!
//! Every stage is a pure function; the engine threads them together
//! and owns error handling and logging.

pub mod alternatives;
pub mod assembler;
pub mod engine;
pub mod feasibility;
pub mod grouping;
pub mod packer;
pub mod slots;

pub use alternatives::propose;
pub use assembler::assemble;
pub use engine::{ScheduleOutcome, ScheduleRequest, Scheduler};
pub use feasibility::evaluate;
pub use grouping::normalize;
pub use packer::{pack, Packing};
pub use slots::{Slot, SlotIter};
