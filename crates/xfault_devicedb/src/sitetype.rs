//! Site-internal functional bits (LUT `INIT[i]`, FF control bits, etc.).
//!
//! A segbits feature of the form `TILE.SITE.BEL.NAME` (four or more
//! dot-separated parts) configures a bit inside a site rather than a PIP.
//! [`SiteType`] groups these by site instance so evaluation can ask "what
//! functional bits does this site have, and where do they live".

use crate::segbits::{SegBitEntry, SegBitsMap};
use std::collections::HashMap;

/// A named functional bit inside a site, e.g. `ALUT.INIT[00]` or `AFF.ZRST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBitDef {
    /// The BEL this bit belongs to (e.g. `ALUT`, `AFF`).
    pub bel: String,
    /// The feature name within the BEL (e.g. `INIT[00]`, `ZRST`).
    pub name: String,
    /// The configuration bits backing this feature.
    pub bits: Vec<SegBitEntry>,
}

/// All functional bits for one site instance within a tile type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteType {
    /// The site instance name (e.g. `SLICEL_X0`).
    pub site: String,
    /// Functional bits defined on this site, in segbits file order.
    pub bits: Vec<SiteBitDef>,
}

/// Builds per-site functional bit tables for a tile type from its segbits map.
///
/// Only features with four or more dot-separated parts (`TILE.SITE.BEL.NAME`,
/// where `NAME` may itself contain dots) describe site bits; three-part
/// features describe PIPs and are handled by [`crate::mux`].
pub fn build_site_types(segbits: &SegBitsMap) -> HashMap<String, SiteType> {
    let mut sites: HashMap<String, SiteType> = HashMap::new();

    for (feature, bits) in segbits {
        let parts: Vec<&str> = feature.split('.').collect();
        if parts.len() < 4 {
            continue;
        }
        let site = parts[1].to_string();
        let bel = parts[2].to_string();
        let name = parts[3..].join(".");

        let entry = sites.entry(site.clone()).or_insert_with(|| SiteType {
            site: site.clone(),
            bits: Vec::new(),
        });
        entry.bits.push(SiteBitDef {
            bel,
            name,
            bits: bits.clone(),
        });
    }

    sites
}
