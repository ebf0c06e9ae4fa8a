//! The design model consumed from an external design-checkpoint reader.
//!
//! Cells, nets, and routed PIP graphs, independent of how they were
//! produced — see the design-query backend polymorphism note: a
//! subprocess-driven EDA tool and a native `.dcp` reader both populate the
//! same [`DesignModel`] shape, and neither shares state with the other.

#![warn(missing_docs)]

pub mod cell;
pub mod model;
pub mod net;

pub use cell::Cell;
pub use model::DesignModel;
pub use net::{NodeRef, PipRef, RouteEdge, RouteGraph, Net};
