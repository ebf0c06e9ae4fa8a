//! Per-bit-group fault classification, evaluation, and run statistics.
//!
//! [`evaluate_group`] implements the classify/apply/evaluate/aggregate
//! algorithm over one bit group: classify every bit's resource against the
//! baseline [`xfault_tilemap::TileMap`], apply the whole group's flips
//! atomically, then compare each bit's resource state before and after to
//! produce a [`FaultRecord`]. [`statistics::Statistics`] folds the records
//! from every group evaluated in a run into aggregate counts.
//!
//! Bit groups are independent of one another and may be evaluated
//! concurrently via [`parallel::evaluate_groups_parallel`] when the
//! `TileMap` and `DesignModel` are shared read-only.

#![warn(missing_docs)]

pub mod evaluator;
pub mod parallel;
pub mod record;
pub mod statistics;

pub use evaluator::evaluate_group;
pub use parallel::evaluate_groups_parallel;
pub use record::{Classification, FaultKind, FaultRecord, ShortParticipant};
pub use statistics::{GroupReport, Statistics};
