//! The design model: an arena of cells and nets with lookup indices, built
//! once from a parsed design checkpoint and read-only thereafter.

use crate::cell::Cell;
use crate::net::{Net, NodeRef, PipRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use xfault_common::{CellId, NetId};

/// The in-memory design: placement and routing, independent of any
/// particular dcp reader backend.
///
/// Built once per run from whichever [`DesignModel`] exposes this shape
/// (subprocess-driven EDA tool or native reader — see the design-query
/// backend polymorphism note); the two backends share no state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignModel {
    /// All cells in the design.
    pub cells: Vec<Cell>,
    /// All nets in the design.
    pub nets: Vec<Net>,
    /// Auxiliary index: `(tile, site, bel)` to cell ID.
    #[serde(skip)]
    cell_by_location: HashMap<(String, String, String), CellId>,
    /// Auxiliary index: PIP to the net whose route traverses it.
    #[serde(skip)]
    net_by_pip: HashMap<PipRef, NetId>,
    /// Auxiliary index: every node reached by any net's route (including
    /// each net's driver node) to that net.
    #[serde(skip)]
    net_by_node: HashMap<NodeRef, NetId>,
}

impl DesignModel {
    /// Creates an empty design model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell and returns its ID.
    pub fn add_cell(&mut self, mut cell: Cell) -> CellId {
        let id = CellId::from_raw(self.cells.len() as u32);
        cell.id = id;
        self.cell_by_location
            .insert((cell.tile.clone(), cell.site.clone(), cell.bel.clone()), id);
        self.cells.push(cell);
        id
    }

    /// Adds a net and returns its ID, indexing its driver node and every PIP
    /// and node its route graph reaches.
    pub fn add_net(&mut self, mut net: Net) -> NetId {
        let id = NetId::from_raw(self.nets.len() as u32);
        net.id = id;

        self.net_by_node.insert(net.driver_node.clone(), id);
        for (from, edges) in &net.route.edges {
            self.net_by_node.insert(from.clone(), id);
            for edge in edges {
                self.net_by_pip.insert(edge.pip.clone(), id);
                self.net_by_node.insert(edge.to.clone(), id);
            }
        }

        self.nets.push(net);
        id
    }

    /// Rebuilds auxiliary indices, e.g. after deserializing a design model
    /// whose indices were skipped.
    pub fn rebuild_indices(&mut self) {
        self.cell_by_location.clear();
        for cell in &self.cells {
            self.cell_by_location.insert(
                (cell.tile.clone(), cell.site.clone(), cell.bel.clone()),
                cell.id,
            );
        }
        self.net_by_pip.clear();
        self.net_by_node.clear();
        for net in &self.nets {
            self.net_by_node.insert(net.driver_node.clone(), net.id);
            for (from, edges) in &net.route.edges {
                self.net_by_node.insert(from.clone(), net.id);
                for edge in edges {
                    self.net_by_pip.insert(edge.pip.clone(), net.id);
                    self.net_by_node.insert(edge.to.clone(), net.id);
                }
            }
        }
    }

    /// Returns the net with the given ID.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id.as_raw() as usize]
    }

    /// Returns the cell with the given ID.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.as_raw() as usize]
    }

    /// Returns the cell placed at `(tile, site, bel)`, if any.
    pub fn cell_at(&self, tile: &str, site: &str, bel: &str) -> Option<&Cell> {
        self.cell_by_location
            .get(&(tile.to_string(), site.to_string(), bel.to_string()))
            .map(|&id| self.cell(id))
    }

    /// Returns the net whose routed path currently traverses the PIP from
    /// `input` to `output` within `tile`.
    pub fn net_through_pip(&self, tile: &str, input: &str, output: &str) -> Option<&Net> {
        let key = PipRef::new(tile, input, output);
        self.net_by_pip.get(&key).map(|&id| self.net(id))
    }

    /// Returns the net whose route reaches `node` (as a PIP output, or as
    /// its driver), within `tile`.
    pub fn net_driving_node(&self, tile: &str, node: &str) -> Option<&Net> {
        let key = NodeRef::new(tile, node);
        self.net_by_node.get(&key).map(|&id| self.net(id))
    }

    /// Returns the number of cells in the design.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of nets in the design.
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }
}
