//! What a single bitstream coordinate configures, if anything.

use xfault_devicedb::MuxBitRole;

/// What a bit coordinate configures, as resolved against a tile's database
/// binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    /// A bit of a routing mux's row/column select encoding.
    RoutingMuxBit {
        /// The tile instance owning the mux.
        tile: String,
        /// The wire the mux drives (the mux's identity within its tile).
        mux: String,
        /// Which half of the row/column encoding this bit belongs to.
        role: MuxBitRole,
    },
    /// A functional bit inside a site (LUT INIT, FF control, etc.).
    SiteBit {
        /// The tile instance owning the site.
        tile: String,
        /// The site instance name.
        site: String,
        /// The BEL within the site.
        bel: String,
        /// The feature name within the BEL.
        name: String,
    },
    /// Within a tile's defined configuration region, but this bit has no
    /// entry in the device database's feature tables.
    Unknown,
    /// Not part of any tile's configuration region for this part.
    Undefined,
}

impl ResourceRef {
    /// Returns `true` for the two database-backed variants (as opposed to
    /// `Unknown`/`Undefined`, which describe the absence of a mapping).
    pub fn is_mapped(&self) -> bool {
        matches!(self, ResourceRef::RoutingMuxBit { .. } | ResourceRef::SiteBit { .. })
    }
}
