//! Forward traversal of a net's routed PIP graph from a disturbed point to
//! its downstream sink cells.
//!
//! Given a broken or altered PIP, [`trace_from_pip`] walks forward through
//! the net's route graph (never back into the upstream portion of the net),
//! following every fanout branch, and collects the union of sink cells
//! reached. A visited-node guard makes the walk terminate even on malformed,
//! cyclic input, and a caller-supplied depth bound turns a pathological walk
//! into a `TraceOverflow` diagnostic instead of an unbounded traversal.

#![warn(missing_docs)]

pub mod trace;

pub use trace::{trace_from_pip, TraceResult};
