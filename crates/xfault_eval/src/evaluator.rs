//! Classify, apply, and evaluate a bit group against a design.
//!
//! Per bit group: classify every bit's resource against the baseline
//! [`TileMap`], apply the whole group's flips atomically via
//! [`TileMap::with_flips`], then evaluate each bit's effect by comparing its
//! resource's pre- and post-flip state against the [`DesignModel`].

use crate::record::{Classification, FaultKind, FaultRecord, ShortParticipant};
use xfault_common::BitCoord;
use xfault_design::{DesignModel, PipRef};
use xfault_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Location};
use xfault_devicedb::MuxBitRole;
use xfault_nettrace::trace_from_pip;
use xfault_tilemap::{MuxState, ResourceRef, TileMap};

/// How many nodes a single net trace may visit before it is cut off as a
/// [`xfault_diagnostics::Category::Trace`] overflow.
const DEFAULT_TRACE_DEPTH_BOUND: u32 = 10_000;

fn classify(resource: &ResourceRef) -> Classification {
    match resource {
        ResourceRef::RoutingMuxBit { role, .. } => match role {
            MuxBitRole::Row => Classification::MuxRow,
            MuxBitRole::Column => Classification::MuxCol,
        },
        ResourceRef::SiteBit { name, .. } if name.starts_with("INIT") => Classification::SiteInit,
        ResourceRef::SiteBit { .. } => Classification::Other,
        ResourceRef::Unknown => Classification::Unknown,
        ResourceRef::Undefined => Classification::Undefined,
    }
}

/// Evaluates every bit in one bit group, in input order.
///
/// `group_index` identifies the group within the overall run for diagnostic
/// locations; `depth_bound` overrides [`DEFAULT_TRACE_DEPTH_BOUND`] when
/// `Some`.
pub fn evaluate_group(
    tile_map: &TileMap,
    design: &DesignModel,
    group: &[BitCoord],
    group_index: usize,
    depth_bound: Option<u32>,
    diagnostics: &DiagnosticSink,
) -> Vec<FaultRecord> {
    let flipped = tile_map.with_flips(group);
    let depth_bound = depth_bound.unwrap_or(DEFAULT_TRACE_DEPTH_BOUND);

    group
        .iter()
        .enumerate()
        .map(|(bit_index, &coord)| {
            let location = Location::new(group_index, bit_index);
            let prev = tile_map.bit_value(coord);
            let new = flipped.bit_value(coord);
            let resource = tile_map.resource_at(coord);
            let classification = classify(&resource);
            let kind = evaluate_bit(
                tile_map,
                &flipped,
                design,
                &resource,
                classification,
                depth_bound,
                location,
                diagnostics,
            );
            FaultRecord {
                coord,
                prev,
                new,
                classification,
                kind,
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn evaluate_bit(
    before: &TileMap,
    after: &TileMap,
    design: &DesignModel,
    resource: &ResourceRef,
    classification: Classification,
    depth_bound: u32,
    location: Location,
    diagnostics: &DiagnosticSink,
) -> FaultKind {
    // `Other`-classified site bits are reported as `Unsupported` regardless
    // of whether a cell happens to be placed there.
    if classification == Classification::Other {
        return FaultKind::Unsupported;
    }

    match resource {
        ResourceRef::SiteBit { tile, site, bel, name } => {
            evaluate_site_bit(design, tile, site, bel, name)
        }
        ResourceRef::RoutingMuxBit { tile, mux, .. } => evaluate_mux_bit(
            before,
            after,
            design,
            tile,
            mux,
            depth_bound,
            location,
            diagnostics,
        ),
        ResourceRef::Unknown => {
            diagnostics.emit(Diagnostic::advisory(
                DiagnosticCode::new(Category::Resolver, 1),
                "no database mapping for bit",
                location,
            ));
            FaultKind::Unknown
        }
        ResourceRef::Undefined => FaultKind::Undefined,
    }
}

fn evaluate_site_bit(design: &DesignModel, tile: &str, site: &str, bel: &str, name: &str) -> FaultKind {
    match design.cell_at(tile, site, bel) {
        Some(cell) => FaultKind::CLBAltered {
            cell: cell.name.clone(),
            bel: bel.to_string(),
            bit_name: name.to_string(),
        },
        None => FaultKind::Errorless {
            reason: "no cell placed".to_string(),
        },
    }
}

fn evaluate_mux_bit(
    before: &TileMap,
    after: &TileMap,
    design: &DesignModel,
    tile: &str,
    mux: &str,
    depth_bound: u32,
    location: Location,
    diagnostics: &DiagnosticSink,
) -> FaultKind {
    let prev_state = before.mux_state(tile, mux);
    let new_state = after.mux_state(tile, mux);

    match (prev_state, new_state) {
        (MuxState::Active(x), MuxState::Inactive) => {
            match design.net_through_pip(tile, &x, mux) {
                Some(net) => {
                    let sinks = trace_from_pip(net, tile, mux, depth_bound, location, diagnostics);
                    FaultKind::PipOpen {
                        net: net.name.clone(),
                        deactivated_pip: PipRef::new(tile, x, mux),
                        affected_sinks: sink_names(design, &sinks.cells),
                    }
                }
                None => FaultKind::Errorless {
                    reason: "deactivated input was not driving a net".to_string(),
                },
            }
        }
        (MuxState::Active(x), MuxState::Active(y)) if x != y => {
            let x_net = design.net_through_pip(tile, &x, mux);
            match x_net {
                None => FaultKind::Errorless {
                    reason: "previously selected input was unconnected".to_string(),
                },
                Some(x_net) => {
                    let y_net = design.net_through_pip(tile, &y, mux);
                    let mut participants = vec![ShortParticipant::Net(x_net.name.clone())];
                    participants.push(match y_net {
                        Some(net) => ShortParticipant::Net(net.name.clone()),
                        None => ShortParticipant::Unconnected(y.clone()),
                    });
                    participants.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
                    let sinks = trace_from_pip(x_net, tile, mux, depth_bound, location, diagnostics);
                    FaultKind::PipShort {
                        participants,
                        activated_pip: PipRef::new(tile, y, mux),
                        affected_sinks: sink_names(design, &sinks.cells),
                    }
                }
            }
        }
        (MuxState::Inactive, MuxState::Active(y)) => match design.net_driving_node(tile, mux) {
            Some(sink_net) => match design.net_through_pip(tile, &y, mux) {
                Some(y_net) => {
                    let sinks = trace_from_pip(y_net, tile, mux, depth_bound, location, diagnostics);
                    let mut participants = vec![
                        ShortParticipant::Net(sink_net.name.clone()),
                        ShortParticipant::Net(y_net.name.clone()),
                    ];
                    participants.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
                    FaultKind::PipShort {
                        participants,
                        activated_pip: PipRef::new(tile, y, mux),
                        affected_sinks: sink_names(design, &sinks.cells),
                    }
                }
                None => FaultKind::Errorless {
                    reason: "newly selected input is unconnected".to_string(),
                },
            },
            None => FaultKind::Errorless {
                reason: "output node is not a sink of any net".to_string(),
            },
        },
        (MuxState::Inactive, MuxState::Conflicted(ys))
        | (MuxState::Active(_), MuxState::Conflicted(ys)) => {
            let mut participants: Vec<ShortParticipant> = Vec::new();
            let mut sink_union = std::collections::BTreeSet::new();
            for wire in &ys {
                match design.net_through_pip(tile, wire, mux) {
                    Some(net) => {
                        participants.push(ShortParticipant::Net(net.name.clone()));
                        let sinks = trace_from_pip(net, tile, mux, depth_bound, location, diagnostics);
                        sink_union.extend(sinks.cells);
                    }
                    None => participants.push(ShortParticipant::Unconnected(wire.clone())),
                }
            }
            participants.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
            FaultKind::PipShort {
                participants,
                activated_pip: PipRef::new(tile, ys.first().cloned().unwrap_or_default(), mux),
                affected_sinks: sink_names(design, &sink_union),
            }
        }
        (MuxState::Inactive, MuxState::Inactive) => FaultKind::Errorless {
            reason: "mux remains unselected".to_string(),
        },
        (MuxState::Active(x), MuxState::Active(_)) => FaultKind::Errorless {
            reason: format!("selected input {x} unchanged"),
        },
        (MuxState::Conflicted(_), _) | (_, MuxState::Conflicted(_)) => FaultKind::Errorless {
            reason: "baseline mux was already conflicted".to_string(),
        },
    }
}

fn sink_names(design: &DesignModel, cells: &std::collections::BTreeSet<xfault_common::CellId>) -> Vec<String> {
    let mut names: Vec<String> = cells.iter().map(|&id| design.cell(id).name.clone()).collect();
    names.sort();
    names
}
