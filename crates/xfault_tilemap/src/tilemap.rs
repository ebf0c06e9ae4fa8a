//! Binds a device database and a decoded bitstream into a queryable,
//! per-tile configuration model.

use crate::binding::absolute_coord;
use crate::resource::ResourceRef;
use crate::mux_state::MuxState;
use std::collections::HashMap;
use std::sync::Arc;
use xfault_bitstream::Bitstream;
use xfault_common::{BitCoord, TileId};
use xfault_devicedb::mux::classify_role;
use xfault_devicedb::tilegrid::TileBitSegment;
use xfault_devicedb::DeviceDB;

/// One candidate input to a routing mux, bound to absolute bit coordinates.
#[derive(Debug, Clone)]
struct MuxInputBinding {
    src_wire: String,
    bits: Vec<(BitCoord, bool)>,
}

/// A routing mux as materialized for one tile instance.
#[derive(Debug, Clone, Default)]
struct MuxBinding {
    inputs: Vec<MuxInputBinding>,
}

/// A tile instance within the arena, as bound to its configuration region.
#[derive(Debug, Clone)]
struct TileData {
    name: String,
    muxes: HashMap<String, MuxBinding>,
}

/// The immutable, shared part of a TileMap: everything that is built once
/// from the device database and never changes across flip overlays.
#[derive(Debug)]
struct TileMapData {
    tiles: Vec<TileData>,
    tile_index: HashMap<String, TileId>,
    /// Every bitstream coordinate this database binds to a known resource.
    coord_resource: HashMap<BitCoord, ResourceRef>,
    /// Frame address -> word ranges `(word_offset, word_count)` bound to
    /// *some* tile's configuration region, used to tell `Unknown` (defined
    /// but unmapped) apart from `Undefined` (no tile owns this frame at all).
    defined_frames: HashMap<u32, Vec<(u32, u32)>>,
    bitstream: Bitstream,
}

/// For each tile, the bus segment whose bit coordinates its segbits
/// features are relative to. A tile instance may list several bus segments
/// (e.g. `CLB_IO_CLK` and `BLOCK_RAM`); Project X-Ray's segbits files are
/// per tile-type, not per-bus, so the lexicographically first bus name is
/// used deterministically when more than one segment is present.
fn primary_segment(bits: &HashMap<String, TileBitSegment>) -> Option<&TileBitSegment> {
    bits.iter().min_by_key(|(name, _)| name.as_str()).map(|(_, seg)| seg)
}

/// A queryable, per-tile configuration model over a device database and a
/// decoded bitstream.
///
/// `TileMap` is built once per run and is read-only afterward. [`Self::with_flips`]
/// produces a shadow view with specific bits toggled, without copying the
/// shared binding data or the baseline bitstream.
#[derive(Debug, Clone)]
pub struct TileMap {
    base: Arc<TileMapData>,
    overlay: HashMap<BitCoord, bool>,
}

impl TileMap {
    /// Builds a TileMap by binding every tile in `db`'s grid to `bitstream`.
    pub fn build(db: &DeviceDB, bitstream: Bitstream) -> Self {
        let mut tiles = Vec::new();
        let mut tile_index = HashMap::new();
        let mut coord_resource = HashMap::new();
        let mut defined_frames: HashMap<u32, Vec<(u32, u32)>> = HashMap::new();

        let tile_names: Vec<(String, String)> = db
            .grid()
            .map(|(name, tile_type, _, _)| (name.to_string(), tile_type.to_string()))
            .collect();

        for (name, tile_type) in tile_names {
            let entry = match db.tile(&name) {
                Some(e) => e,
                None => continue,
            };

            for segment in entry.bits.values() {
                for frame in segment.baseaddr..segment.baseaddr + segment.frames {
                    defined_frames
                        .entry(frame)
                        .or_default()
                        .push((segment.offset, segment.words));
                }
            }

            let mut muxes: HashMap<String, MuxBinding> = HashMap::new();
            if let (Some(segment), Some(db_muxes)) =
                (primary_segment(&entry.bits), db.muxes_for(&tile_type))
            {
                for (dst_wire, routing_mux) in db_muxes {
                    let mut binding = MuxBinding::default();
                    for input in &routing_mux.inputs {
                        let mut bits = Vec::with_capacity(input.bits.len());
                        for seg_bit in &input.bits {
                            let coord =
                                absolute_coord(segment, seg_bit.frame_offset, seg_bit.bit_position);
                            coord_resource.insert(
                                coord,
                                ResourceRef::RoutingMuxBit {
                                    tile: name.clone(),
                                    mux: dst_wire.clone(),
                                    role: classify_role(seg_bit.bit_position),
                                },
                            );
                            bits.push((coord, seg_bit.inverted));
                        }
                        binding.inputs.push(MuxInputBinding {
                            src_wire: input.src_wire.clone(),
                            bits,
                        });
                    }
                    muxes.insert(dst_wire.clone(), binding);
                }
            }

            if let (Some(segment), Some(site_types)) =
                (primary_segment(&entry.bits), db.site_types_for(&tile_type))
            {
                for site_type in site_types.values() {
                    for site_bit in &site_type.bits {
                        for seg_bit in &site_bit.bits {
                            let coord =
                                absolute_coord(segment, seg_bit.frame_offset, seg_bit.bit_position);
                            coord_resource.insert(
                                coord,
                                ResourceRef::SiteBit {
                                    tile: name.clone(),
                                    site: site_type.site.clone(),
                                    bel: site_bit.bel.clone(),
                                    name: site_bit.name.clone(),
                                },
                            );
                        }
                    }
                }
            }

            let id = TileId::from_raw(tiles.len() as u32);
            tile_index.insert(name.clone(), id);
            tiles.push(TileData { name, muxes });
        }

        let base = TileMapData {
            tiles,
            tile_index,
            coord_resource,
            defined_frames,
            bitstream,
        };

        Self {
            base: Arc::new(base),
            overlay: HashMap::new(),
        }
    }

    /// Returns the number of tile instances bound into this map.
    pub fn tile_count(&self) -> usize {
        self.base.tiles.len()
    }

    /// Returns the current value (overlay-aware) of the bit at `coord`,
    /// reflecting any [`Self::with_flips`] applied to this view.
    pub fn bit_value(&self, coord: BitCoord) -> bool {
        self.bit(coord)
    }

    /// Returns the current value (overlay-aware) of the bit at `coord`.
    fn bit(&self, coord: BitCoord) -> bool {
        if let Some(&flipped) = self.overlay.get(&coord) {
            return flipped;
        }
        self.base
            .bitstream
            .get(coord.frame.as_raw(), coord.word, coord.bit)
            == 1
    }

    /// Resolves a bitstream coordinate to the resource it configures.
    pub fn resource_at(&self, coord: BitCoord) -> ResourceRef {
        if let Some(resource) = self.base.coord_resource.get(&coord) {
            return resource.clone();
        }
        match self.base.defined_frames.get(&coord.frame.as_raw()) {
            Some(ranges) => {
                let word = coord.word as u32;
                if ranges
                    .iter()
                    .any(|&(offset, count)| word >= offset && word < offset + count)
                {
                    ResourceRef::Unknown
                } else {
                    ResourceRef::Undefined
                }
            }
            None => ResourceRef::Undefined,
        }
    }

    /// Returns the live state of the routing mux driving `dst_wire` within
    /// `tile`. Returns [`MuxState::Inactive`] if the tile or mux is unknown.
    pub fn mux_state(&self, tile: &str, dst_wire: &str) -> MuxState {
        let tile_data = match self
            .base
            .tile_index
            .get(tile)
            .and_then(|id| self.base.tiles.get(id.as_raw() as usize))
        {
            Some(t) => t,
            None => return MuxState::Inactive,
        };
        let binding = match tile_data.muxes.get(dst_wire) {
            Some(b) => b,
            None => return MuxState::Inactive,
        };

        let mut active: Vec<String> = binding
            .inputs
            .iter()
            .filter(|input| {
                !input.bits.is_empty()
                    && input.bits.iter().all(|&(coord, inverted)| self.bit(coord) != inverted)
            })
            .map(|input| input.src_wire.clone())
            .collect();

        match active.len() {
            0 => MuxState::Inactive,
            1 => MuxState::Active(active.remove(0)),
            _ => {
                active.sort();
                MuxState::Conflicted(active)
            }
        }
    }

    /// Returns a shadow view of this TileMap with every bit in `bit_group`
    /// toggled from its current value, overlaying without copying the
    /// shared binding data or the baseline bitstream.
    pub fn with_flips(&self, bit_group: &[BitCoord]) -> TileMap {
        let mut overlay = self.overlay.clone();
        for &coord in bit_group {
            let current = self.bit(coord);
            overlay.insert(coord, !current);
        }
        TileMap {
            base: Arc::clone(&self.base),
            overlay,
        }
    }
}
