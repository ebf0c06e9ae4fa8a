//! Forward BFS over a net's route graph from a disturbed PIP's output node.

use std::collections::{BTreeSet, HashSet, VecDeque};
use xfault_common::CellId;
use xfault_design::{Net, NodeRef};
use xfault_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Location};

/// The result of tracing forward from a disturbance point: every distinct
/// sink cell reached, and whether the walk was cut short.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceResult {
    /// Distinct sink cells reached downstream of the starting node, in a
    /// stable order (by [`CellId`]; callers that need name order re-sort).
    pub cells: BTreeSet<CellId>,
    /// `true` if the walk hit a cycle or the configured depth bound before
    /// exhausting every downstream branch. Never fatal — see
    /// [`xfault_diagnostics`] — the result above is the partial sink set
    /// collected before the cutoff.
    pub overflowed: bool,
}

/// Traces forward through `net`'s routed PIP graph starting at the node
/// reached by the PIP ending at `(tile, output_wire)`, collecting every
/// distinct sink cell downstream.
///
/// Forward-only: never revisits a node already seen, which both prevents
/// re-entering the upstream portion of the net and serves as the mandatory
/// cycle guard (routed nets are DAGs in practice, but malformed input is not
/// trusted). Branches at fanout points are each walked; the sink set is the
/// union across all of them.
///
/// If the walk visits more than `depth_bound` nodes before exhausting every
/// branch, it stops and emits a `TraceOverflow` diagnostic to `diagnostics`
/// at `location`, returning the partial sink set collected so far with
/// `overflowed` set.
pub fn trace_from_pip(
    net: &Net,
    tile: &str,
    output_wire: &str,
    depth_bound: u32,
    location: Location,
    diagnostics: &DiagnosticSink,
) -> TraceResult {
    let start = NodeRef::new(tile, output_wire);
    let mut visited: HashSet<NodeRef> = HashSet::new();
    let mut queue: VecDeque<NodeRef> = VecDeque::new();
    let mut cells = BTreeSet::new();
    let mut overflowed = false;

    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if let Some(&cell) = net.route.sink_cells.get(&node) {
            cells.insert(cell);
        }

        for edge in net.route.edges_from(&node) {
            if visited.len() as u32 >= depth_bound {
                overflowed = true;
                break;
            }
            if visited.insert(edge.to.clone()) {
                queue.push_back(edge.to.clone());
            }
        }
        if overflowed {
            break;
        }
    }

    if overflowed {
        diagnostics.emit(Diagnostic::warning(
            DiagnosticCode::new(Category::Trace, 1),
            format!(
                "net '{}' trace from {tile}/{output_wire} exceeded depth bound {depth_bound}",
                net.name
            ),
            location,
        ));
    }

    TraceResult { cells, overflowed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xfault_common::NetId;
    use xfault_design::{PipRef, RouteEdge, RouteGraph};

    fn chain_net(depth: usize) -> Net {
        let mut route = RouteGraph::new();
        for i in 0..depth {
            let from = NodeRef::new("T", format!("W{i}"));
            let to = NodeRef::new("T", format!("W{}", i + 1));
            route.edges.insert(
                from,
                vec![RouteEdge {
                    pip: PipRef::new("T", format!("W{i}"), format!("W{}", i + 1)),
                    to,
                }],
            );
        }
        route
            .sink_cells
            .insert(NodeRef::new("T", format!("W{depth}")), CellId::from_raw(0));
        Net {
            id: NetId::from_raw(0),
            name: "net_0".to_string(),
            driver_node: NodeRef::new("T", "W0"),
            route,
        }
    }

    #[test]
    fn collects_single_sink() {
        let net = chain_net(3);
        let sink = DiagnosticSink::new();
        let result = trace_from_pip(&net, "T", "W0", 100, Location::new(0, 0), &sink);
        assert_eq!(result.cells.len(), 1);
        assert!(!result.overflowed);
        assert!(!sink.has_warnings());
    }

    #[test]
    fn collects_across_fanout() {
        let mut route = RouteGraph::new();
        let from = NodeRef::new("T", "OUT");
        route.edges.insert(
            from.clone(),
            vec![
                RouteEdge {
                    pip: PipRef::new("T", "OUT", "A"),
                    to: NodeRef::new("T", "A"),
                },
                RouteEdge {
                    pip: PipRef::new("T", "OUT", "B"),
                    to: NodeRef::new("T", "B"),
                },
            ],
        );
        route.sink_cells.insert(NodeRef::new("T", "A"), CellId::from_raw(0));
        route.sink_cells.insert(NodeRef::new("T", "B"), CellId::from_raw(1));
        let net = Net {
            id: NetId::from_raw(0),
            name: "fanout_net".to_string(),
            driver_node: NodeRef::new("T", "OUT"),
            route,
        };

        let sink = DiagnosticSink::new();
        let result = trace_from_pip(&net, "T", "OUT", 100, Location::new(0, 0), &sink);
        assert_eq!(result.cells.len(), 2);
    }

    #[test]
    fn cycle_is_bounded_not_infinite() {
        let mut route = RouteGraph::new();
        route.edges.insert(
            NodeRef::new("T", "A"),
            vec![RouteEdge {
                pip: PipRef::new("T", "A", "B"),
                to: NodeRef::new("T", "B"),
            }],
        );
        route.edges.insert(
            NodeRef::new("T", "B"),
            vec![RouteEdge {
                pip: PipRef::new("T", "B", "A"),
                to: NodeRef::new("T", "A"),
            }],
        );
        let net = Net {
            id: NetId::from_raw(0),
            name: "cyclic_net".to_string(),
            driver_node: NodeRef::new("T", "A"),
            route,
        };

        let sink = DiagnosticSink::new();
        let result = trace_from_pip(&net, "T", "A", 100, Location::new(0, 0), &sink);
        assert!(!result.overflowed);
        assert!(result.cells.is_empty());
    }

    #[test]
    fn depth_bound_exceeded_emits_diagnostic() {
        let net = chain_net(10);
        let sink = DiagnosticSink::new();
        let result = trace_from_pip(&net, "T", "W0", 3, Location::new(2, 5), &sink);
        assert!(result.overflowed);
        assert!(sink.has_warnings());
    }

    #[test]
    fn empty_sink_set_is_not_an_error() {
        let route = RouteGraph::new();
        let net = Net {
            id: NetId::from_raw(0),
            name: "dead_end".to_string(),
            driver_node: NodeRef::new("T", "OUT"),
            route,
        };
        let sink = DiagnosticSink::new();
        let result = trace_from_pip(&net, "T", "OUT", 10, Location::new(0, 0), &sink);
        assert!(result.cells.is_empty());
        assert!(!result.overflowed);
    }
}
