//! Opaque ID newtypes for design and device-model entities.
//!
//! Each ID is a thin `u32` wrapper that is `Copy`, `Hash`, and `Serialize`/
//! `Deserialize`. Per the arena-owned-tables design note, tiles, cells, and
//! nets hold these indices rather than back-pointers into the structures
//! that own them, which keeps `TileMap` and `DesignModel` free of cyclic
//! ownership.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a site (placement location) in the device grid.
    SiteId
);

define_id!(
    /// Opaque, copyable ID for a programmable interconnect point (PIP) within a tile.
    PipId
);

define_id!(
    /// Opaque, copyable ID for a routing node (a PIP input or output wire).
    NodeId
);

define_id!(
    /// Opaque, copyable ID for a design [`Cell`](xfault_design).
    CellId
);

define_id!(
    /// Opaque, copyable ID for a design [`Net`](xfault_design).
    NetId
);

define_id!(
    /// Opaque, copyable ID for a tile instance owned by a TileMap arena.
    TileId
);
