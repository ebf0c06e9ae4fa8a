//! Routing-mux construction from segbits PIP-style features.
//!
//! A segbits feature of the form `TILE.DST_WIRE.SRC_WIRE` enables a PIP that
//! connects `SRC_WIRE` to `DST_WIRE`. Grouping all such features in a tile
//! type by `DST_WIRE` reconstructs the routing mux that selects, among all
//! wires that can drive `DST_WIRE`, which one currently does.

use crate::segbits::{SegBitEntry, SegBitsMap};
use std::collections::HashMap;

/// Whether a configuration bit encodes a mux's row or column selector.
///
/// Project X-Ray segbits don't label which half of a mux-select bit a given
/// bit position belongs to; Xilinx muxes are conventionally encoded as a
/// row/column pair split evenly across the bit range; we classify bit
/// positions below 16 as row-select and the rest as column-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxBitRole {
    /// A row-select encoding bit.
    Row,
    /// A column-select encoding bit.
    Column,
}

/// Classifies a bit position within a mux encoding as row- or column-select.
pub fn classify_role(bit_position: u32) -> MuxBitRole {
    if bit_position < 16 {
        MuxBitRole::Row
    } else {
        MuxBitRole::Column
    }
}

/// One candidate input to a routing mux, with the bits that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuxInput {
    /// The source wire name, selectable as this mux's active input.
    pub src_wire: String,
    /// The configuration bits that, when set, select this input.
    pub bits: Vec<SegBitEntry>,
}

/// A reconstructed routing mux: the set of wires that can drive `dst_wire`,
/// and the bits that select each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingMux {
    /// The wire this mux drives.
    pub dst_wire: String,
    /// Candidate inputs, in the order they appeared in the segbits file.
    pub inputs: Vec<MuxInput>,
}

impl RoutingMux {
    /// Returns the bit position range's roles for this mux's inputs, zipped
    /// with each entry's source wire.
    pub fn bit_roles(&self) -> Vec<(MuxBitRole, &str)> {
        self.inputs
            .iter()
            .flat_map(|input| {
                input
                    .bits
                    .iter()
                    .map(move |b| (classify_role(b.bit_position), input.src_wire.as_str()))
            })
            .collect()
    }
}

/// Builds all routing muxes for a tile type from its segbits map.
///
/// Only 3-part features (`TILE.DST_WIRE.SRC_WIRE`) describe PIPs; 4-part
/// features describe site-internal bits and are ignored here (see
/// [`crate::sitetype`]).
pub fn build_muxes(segbits: &SegBitsMap) -> HashMap<String, RoutingMux> {
    let mut muxes: HashMap<String, RoutingMux> = HashMap::new();

    for (feature, bits) in segbits {
        let parts: Vec<&str> = feature.split('.').collect();
        if parts.len() != 3 {
            continue;
        }
        let dst_wire = parts[1].to_string();
        let src_wire = parts[2].to_string();

        let mux = muxes.entry(dst_wire.clone()).or_insert_with(|| RoutingMux {
            dst_wire: dst_wire.clone(),
            inputs: Vec::new(),
        });
        mux.inputs.push(MuxInput {
            src_wire,
            bits: bits.clone(),
        });
    }

    muxes
}
