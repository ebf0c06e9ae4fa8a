//! Nets and their routed PIP graphs.
//!
//! A net's routing solution is represented the way the teacher's PnR route
//! trees are: not as a path, but as an adjacency map from each reached node
//! to the edges leaving it, so a downstream walk (`trace_from_pip`, in
//! `xfault_nettrace`) is a bounded graph traversal rather than a search over
//! the whole design.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use xfault_common::{CellId, NetId};

/// A routing-fabric node: a named wire within a tile.
///
/// Distinct from [`xfault_common::NodeId`], which identifies a routing
/// mux's candidate input within a single tile's configuration model — a
/// design-level node spans the whole device and is addressed by name
/// because it must match identifiers produced by either dcp reader backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    /// The tile the wire belongs to.
    pub tile: String,
    /// The wire name within that tile.
    pub wire: String,
}

impl NodeRef {
    /// Creates a node reference from a tile and wire name.
    pub fn new(tile: impl Into<String>, wire: impl Into<String>) -> Self {
        Self {
            tile: tile.into(),
            wire: wire.into(),
        }
    }
}

/// A programmable interconnect point traversal: `input` wire to `output`
/// wire within `tile`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipRef {
    /// The tile containing the PIP.
    pub tile: String,
    /// The PIP's input (source) wire.
    pub input: String,
    /// The PIP's output (destination) wire.
    pub output: String,
}

impl PipRef {
    /// Creates a PIP reference.
    pub fn new(tile: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tile: tile.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

/// One edge in a net's route graph: traversing `pip` reaches `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    /// The PIP traversed to reach the downstream node.
    pub pip: PipRef,
    /// The node reached by traversing `pip`.
    pub to: NodeRef,
}

/// A net's routing solution: an adjacency map from each node the route
/// reaches to the edges leaving it, plus which reached nodes are sink pins
/// (and which cell each belongs to).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGraph {
    /// Outgoing edges from each node this net's route reaches.
    pub edges: HashMap<NodeRef, Vec<RouteEdge>>,
    /// Sink cells reached at each terminal node.
    pub sink_cells: HashMap<NodeRef, CellId>,
}

impl RouteGraph {
    /// Creates an empty route graph (an unrouted or stub net).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the edges leaving `node`, or an empty slice if the route
    /// graph doesn't reach it.
    pub fn edges_from(&self, node: &NodeRef) -> &[RouteEdge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A net in the design: one driver, its routed path, and the sinks it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Net {
    /// The unique ID of this net.
    pub id: NetId,
    /// The design's name for this net.
    pub name: String,
    /// The node the net's driver pin connects to.
    pub driver_node: NodeRef,
    /// The net's routed PIP graph.
    pub route: RouteGraph,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_graph_edges_from_missing_node_is_empty() {
        let graph = RouteGraph::new();
        assert!(graph.edges_from(&NodeRef::new("T", "W")).is_empty());
    }

    #[test]
    fn route_graph_edges_from_present_node() {
        let mut graph = RouteGraph::new();
        let from = NodeRef::new("INT_R_X73Y188", "NR1END3");
        let to = NodeRef::new("INT_R_X73Y188", "SS6BEG0");
        graph.edges.insert(
            from.clone(),
            vec![RouteEdge {
                pip: PipRef::new("INT_R_X73Y188", "NR1END3", "SS6BEG0"),
                to: to.clone(),
            }],
        );
        let edges = graph.edges_from(&from);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to, to);
    }

    #[test]
    fn node_ref_equality_and_hash() {
        use std::collections::HashSet;
        let a = NodeRef::new("T", "W");
        let b = NodeRef::new("T", "W");
        let c = NodeRef::new("T", "X");
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let net = Net {
            id: NetId::from_raw(0),
            name: "clk".to_string(),
            driver_node: NodeRef::new("T", "CLKOUT"),
            route: RouteGraph::new(),
        };
        let json = serde_json::to_string(&net).unwrap();
        let restored: Net = serde_json::from_str(&json).unwrap();
        assert_eq!(net, restored);
    }
}
