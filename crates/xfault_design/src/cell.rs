//! Placed cells in the design.

use serde::{Deserialize, Serialize};
use xfault_common::CellId;

/// A cell placed at a specific BEL within a site.
///
/// Cells are the leaves fault evaluation attributes effects to: a `SiteInit`
/// bit maps to a cell through [`crate::DesignModel::cell_at`], and a PIP
/// fault's `trace_from_pip` walk terminates at sink cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The unique ID of this cell.
    pub id: CellId,
    /// The design's instance name for this cell (e.g.
    /// `builder_bankmachine6_state[1]_i_3_TMR_1`).
    pub name: String,
    /// The tile the cell's site belongs to (e.g. `CLBLM_L_X86Y103`).
    pub tile: String,
    /// The site instance within the tile (e.g. `SLICEM_X0`).
    pub site: String,
    /// The BEL within the site (e.g. `CLUT`).
    pub bel: String,
}
