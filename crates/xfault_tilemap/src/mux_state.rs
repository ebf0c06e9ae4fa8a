//! Live routing-mux state: which candidate input, if any, is selected.

/// The live state of a routing mux.
///
/// Compared between a baseline [`TileMap`](crate::TileMap) and a flipped
/// overlay view to classify what effect a fault bit has on routing. The
/// active variants carry the candidate input's source wire name, since
/// that is what a design model's routing queries key on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxState {
    /// Exactly one candidate input is selected, naming its source wire.
    Active(String),
    /// No candidate input is selected.
    Inactive,
    /// More than one candidate input is simultaneously selected, naming
    /// every selected source wire. Only reachable through a fault; a valid
    /// design never routes this way.
    Conflicted(Vec<String>),
}
