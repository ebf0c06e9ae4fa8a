//! Top-level Project X-Ray database loader.
//!
//! Combines tilegrid, segbits, and tile type data into a single [`DeviceDB`]
//! that resolves bitstream coordinates and configuration-bit features for a
//! single part.
//!
//! The database is loaded from a directory containing the Project X-Ray
//! database files (a clone of `prjxray-db`). The expected directory
//! structure is:
//!
//! ```text
//! prjxray-db/
//! └── artix7/
//!     └── xc7a35t/
//!         ├── tilegrid.json
//!         ├── segbits_clbll_l.db
//!         ├── segbits_int_l.db
//!         ├── tile_type_CLBLL_L.json
//!         └── ...
//! ```

use crate::frame::FrameSegment;
use crate::mux::{self, RoutingMux};
use crate::segbits::{self, SegBitsMap};
use crate::sitetype::{self, SiteType};
use crate::tile_type::{self, TileTypeData};
use crate::tilegrid::{self, TileGrid};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use xfault_common::{CoreError, XFaultResult};

/// The complete Project X-Ray database for a single part.
#[derive(Debug, Clone)]
pub struct DeviceDB {
    /// The device part name (e.g., "xc7a35t").
    pub part: String,
    tilegrid: TileGrid,
    segbits: HashMap<String, SegBitsMap>,
    tile_types: HashMap<String, TileTypeData>,
    muxes: HashMap<String, HashMap<String, RoutingMux>>,
    site_types: HashMap<String, HashMap<String, SiteType>>,
    db_path: PathBuf,
}

/// Known tile types that have segbits files.
const SEGBITS_TILE_TYPES: &[&str] = &[
    "clbll_l",
    "clbll_r",
    "clblm_l",
    "clblm_r",
    "int_l",
    "int_r",
    "liob33",
    "riob33",
    "bram_l",
    "bram_r",
    "dsp_l",
    "dsp_r",
    "hclk_l",
    "hclk_r",
    "cmt_top_l_lower_b",
    "cmt_top_r_lower_b",
];

/// Known tile types that have tile_type JSON files.
const TILE_TYPE_NAMES: &[&str] = &[
    "CLBLL_L", "CLBLL_R", "CLBLM_L", "CLBLM_R", "INT_L", "INT_R", "LIOB33", "RIOB33", "BRAM_L",
    "BRAM_R", "DSP_L", "DSP_R",
];

impl DeviceDB {
    /// Loads the device database from the given root for the specified part.
    ///
    /// The `db_root` should point to the family-level directory (e.g.,
    /// `prjxray-db/artix7/`). The `part` is the device name (e.g., `xc7a35t`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedPart`] if no database entry exists for
    /// `part`, or [`CoreError::MalformedInput`] if a database file cannot be
    /// parsed.
    pub fn load(db_root: &Path, part: &str) -> XFaultResult<Self> {
        let part_dir = db_root.join(part);
        if !part_dir.exists() {
            return Err(CoreError::UnsupportedPart(part.to_string()));
        }

        let tilegrid_path = part_dir.join("tilegrid.json");
        let tilegrid_json = std::fs::read_to_string(&tilegrid_path)?;
        let tilegrid = tilegrid::parse_tilegrid(&tilegrid_json)
            .map_err(|e| CoreError::MalformedInput(format!("tilegrid.json: {e}")))?;

        // Segbits files are loaded best-effort: a tile type absent from this
        // part's database simply has no segbits entry.
        let mut segbits_map = HashMap::new();
        for tile_type in SEGBITS_TILE_TYPES {
            let filename = segbits::segbits_filename(tile_type);
            let segbits_path = part_dir.join(&filename);
            if let Ok(content) = std::fs::read_to_string(&segbits_path) {
                let sb = segbits::parse_segbits(&content)
                    .map_err(|e| CoreError::MalformedInput(format!("{filename}: {e}")))?;
                segbits_map.insert(tile_type.to_ascii_uppercase(), sb);
            }
        }

        let mut tile_types = HashMap::new();
        for type_name in TILE_TYPE_NAMES {
            let filename = tile_type::tile_type_filename(type_name);
            let tt_path = part_dir.join(&filename);
            if let Ok(json) = std::fs::read_to_string(&tt_path) {
                let data = tile_type::parse_tile_type(type_name, &json)
                    .map_err(|e| CoreError::MalformedInput(format!("{filename}: {e}")))?;
                tile_types.insert(type_name.to_string(), data);
            }
        }

        let mut muxes = HashMap::new();
        let mut site_types = HashMap::new();
        for (tile_type, sb) in &segbits_map {
            muxes.insert(tile_type.clone(), mux::build_muxes(sb));
            site_types.insert(tile_type.clone(), sitetype::build_site_types(sb));
        }

        Ok(Self {
            part: part.to_string(),
            tilegrid,
            segbits: segbits_map,
            tile_types,
            muxes,
            site_types,
            db_path: db_root.to_path_buf(),
        })
    }

    /// Returns the tile type definition for the given name, if loaded.
    pub fn tile_type(&self, name: &str) -> Option<&TileTypeData> {
        self.tile_types.get(name)
    }

    /// Returns an iterator over every tile in the grid: `(name, type, x, y)`.
    pub fn grid(&self) -> impl Iterator<Item = (&str, &str, u32, u32)> {
        self.tilegrid
            .iter()
            .map(|(name, e)| (name.as_str(), e.tile_type.as_str(), e.grid_x, e.grid_y))
    }

    /// Returns the underlying tilegrid entry for a tile name, if present.
    pub fn tile(&self, name: &str) -> Option<&tilegrid::TileGridEntry> {
        self.tilegrid.get(name)
    }

    /// Returns where a tile type's configuration bits live relative to its
    /// column's assigned frame range.
    ///
    /// Tile types with no configuration footprint (routing-only overlays,
    /// or types this database has no tilegrid entries for) return
    /// [`FrameSegment::empty`]. A frame offset from the first matching
    /// instance's `baseaddr` is used as `frame_delta`, and `word_offset`/
    /// `word_count` are shared across all instances of a tile type by
    /// construction of the Project X-Ray database.
    pub fn segment(&self, tile_type: &str) -> FrameSegment {
        let first = self
            .tilegrid
            .values()
            .find(|e| e.tile_type == tile_type)
            .and_then(|e| e.bits.values().next());

        match first {
            Some(seg) => FrameSegment {
                frame_delta: 0,
                word_offset: seg.offset,
                word_count: seg.words,
            },
            None => FrameSegment::empty(),
        }
    }

    /// Returns the routing muxes reconstructed for a tile type, keyed by the
    /// wire each mux drives.
    pub fn muxes_for(&self, tile_type: &str) -> Option<&HashMap<String, RoutingMux>> {
        self.muxes.get(tile_type)
    }

    /// Returns the per-site functional bit tables for a tile type, keyed by
    /// site instance name.
    pub fn site_types_for(&self, tile_type: &str) -> Option<&HashMap<String, SiteType>> {
        self.site_types.get(tile_type)
    }

    /// Returns the segbits map for the given tile type, if available.
    pub fn segbits_for_tile_type(&self, tile_type: &str) -> Option<&SegBitsMap> {
        self.segbits.get(&tile_type.to_ascii_uppercase())
    }

    /// Returns the number of tiles in the tilegrid.
    pub fn tile_count(&self) -> usize {
        self.tilegrid.len()
    }

    /// Returns the root path this database was loaded from.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
