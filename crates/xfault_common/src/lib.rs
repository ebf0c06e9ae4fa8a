//! Shared foundational types used across the xfault bitstream fault analyzer.
//!
//! This crate provides the opaque ID newtypes, bitstream coordinate types, and
//! the common result/error type used by every other `xfault_*` crate.

#![warn(missing_docs)]

pub mod bitcoord;
pub mod ids;
pub mod result;

pub use bitcoord::{BitCoord, FrameAddress};
pub use ids::{CellId, NetId, NodeId, PipId, SiteId, TileId};
pub use result::{CoreError, XFaultResult};
