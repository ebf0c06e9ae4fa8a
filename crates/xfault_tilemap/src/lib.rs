//! Binds a Project X-Ray device database and a decoded bitstream into a
//! per-tile, query-only configuration model.
//!
//! [`TileMap`] is the join point between the static device database
//! ([`xfault_devicedb`]) and the decoded configuration memory
//! ([`xfault_bitstream`]): for every tile it resolves bitstream coordinates
//! to the routing-mux bits and site-functional bits they configure, and
//! reports the live selected state of every routing mux. Fault evaluation
//! flips bit groups through [`TileMap::with_flips`] and compares mux state
//! before and after.

#![warn(missing_docs)]

pub mod binding;
pub mod mux_state;
pub mod resource;
pub mod tilemap;

pub use mux_state::MuxState;
pub use resource::ResourceRef;
pub use tilemap::TileMap;
