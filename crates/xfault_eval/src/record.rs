//! The per-bit outcome of evaluating a fault: what resource it hit, and what
//! effect flipping it has.

use serde::{Deserialize, Serialize};
use xfault_common::BitCoord;
use xfault_design::PipRef;

/// The six mutually exclusive classification outcomes for a fault bit,
/// determined solely from the resource the bit configures (never from the
/// design).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// A functional site-configuration bit recognized as an INIT bit
    /// (LUT/SRL/latch initialization content).
    SiteInit,
    /// A routing mux's row-select encoding bit.
    MuxRow,
    /// A routing mux's column-select encoding bit.
    MuxCol,
    /// A site-configuration bit the database defines but this analyzer does
    /// not model the function of (e.g. non-INIT BEL control bits).
    Other,
    /// Within a tile's defined configuration region, but with no database
    /// mapping at all.
    Unknown,
    /// Outside any tile's configuration region for this part.
    Undefined,
}

/// One side of a short: either a design net, or a routing node with no net
/// driving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortParticipant {
    /// A net, named by the design.
    Net(String),
    /// A routing node reachable post-flip with no net currently driving it.
    Unconnected(String),
}

impl ShortParticipant {
    /// The design name (net name or node name) used to order participants
    /// ascending within a `PipShort` record.
    pub fn sort_key(&self) -> &str {
        match self {
            ShortParticipant::Net(name) | ShortParticipant::Unconnected(name) => name,
        }
    }
}

/// What effect a fault bit has, once its resource's pre- and post-flip state
/// has been evaluated against the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// A placed cell's initialization content was altered.
    CLBAltered {
        /// The cell's design name.
        cell: String,
        /// The BEL the cell occupies.
        bel: String,
        /// The INIT feature name that changed.
        bit_name: String,
    },
    /// A mux transitioned from selecting a net-driving input to selecting
    /// none, breaking that net's path through this PIP.
    PipOpen {
        /// The net that was routed through the now-deactivated PIP.
        net: String,
        /// The PIP that no longer passes the net.
        deactivated_pip: PipRef,
        /// Cells downstream of the break that the net no longer reaches.
        affected_sinks: Vec<String>,
    },
    /// A mux activated an input that ties a second signal onto a node
    /// already carrying one, or reroutes one net's driver onto another's
    /// path.
    PipShort {
        /// Every net (or unconnected node) tied together by the short.
        participants: Vec<ShortParticipant>,
        /// The PIP newly passing an unintended signal.
        activated_pip: PipRef,
        /// Cells reachable from the shorted point via the activated path.
        affected_sinks: Vec<String>,
    },
    /// The resource is defined but not modeled by this analyzer.
    Unsupported,
    /// The bit has no database mapping.
    Unknown,
    /// The bit is outside any tile's configuration region.
    Undefined,
    /// The flip has no observable effect on the design.
    Errorless {
        /// Why the flip is inconsequential.
        reason: String,
    },
}

impl FaultKind {
    /// Returns `true` for a significant outcome: neither errorless, nor
    /// undefined, nor unknown.
    pub fn is_significant(&self) -> bool {
        !matches!(
            self,
            FaultKind::Errorless { .. } | FaultKind::Undefined | FaultKind::Unknown
        )
    }
}

/// The full outcome of evaluating one bit within a bit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultRecord {
    /// The bitstream coordinate evaluated.
    pub coord: BitCoord,
    /// The bit's value before the flip.
    pub prev: bool,
    /// The bit's value after the flip.
    pub new: bool,
    /// The resource classification for this bit.
    pub classification: Classification,
    /// The evaluated fault effect.
    pub kind: FaultKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significant_kinds() {
        assert!(FaultKind::CLBAltered {
            cell: "c".into(),
            bel: "ALUT".into(),
            bit_name: "INIT[00]".into(),
        }
        .is_significant());
        assert!(FaultKind::Unsupported.is_significant());
    }

    #[test]
    fn non_significant_kinds() {
        assert!(!FaultKind::Errorless {
            reason: "no cell placed".into()
        }
        .is_significant());
        assert!(!FaultKind::Undefined.is_significant());
        assert!(!FaultKind::Unknown.is_significant());
    }

    #[test]
    fn serde_roundtrip() {
        let record = FaultRecord {
            coord: BitCoord::new(0x00402b22, 7, 15),
            prev: false,
            new: true,
            classification: Classification::MuxRow,
            kind: FaultKind::PipOpen {
                net: "decode_to_execute[22]".into(),
                deactivated_pip: PipRef::new("INT_R_X73Y188", "NR1END3", "SS6BEG0"),
                affected_sinks: vec!["reg_a".into()],
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: FaultRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
