//! Project X-Ray database integration for Xilinx 7-series FPGAs.
//!
//! This crate loads and parses the [Project X-Ray](https://github.com/f4pga/prjxray)
//! open-source database to provide real tile-grid, segbits, and tile-type
//! data for Xilinx Artix-7 parts.
//!
//! # Database files
//!
//! The X-Ray database contains several file types per part:
//!
//! - `tilegrid.json` — tile positions, frame base addresses, and site assignments
//! - `segbits_*.db` — feature-to-config-bit mappings per tile type
//! - `tile_type_*.json` — PIP definitions and site pin-to-wire mappings
//!
//! # Usage
//!
//! Point the `device_db_root` field of `xfault.toml` at a clone of the
//! `prjxray-db` repository, then call [`DeviceDB::load`].

#![warn(missing_docs)]

pub mod db;
pub mod frame;
pub mod mux;
pub mod segbits;
pub mod sitetype;
pub mod tile_type;
pub mod tilegrid;

pub use db::DeviceDB;
pub use frame::FrameSegment;
pub use mux::{MuxBitRole, MuxInput, RoutingMux};
pub use sitetype::{SiteBitDef, SiteType};
