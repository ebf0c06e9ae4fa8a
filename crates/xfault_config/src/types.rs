//! Configuration types deserialized from `xfault.toml`.

use serde::Deserialize;

/// The top-level run configuration parsed from `xfault.toml`.
///
/// Describes everything a single fault-evaluation run needs: where the
/// device database lives, which part the bitstream targets, the input
/// files, and the bound on net-trace depth.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Root directory of the Project X-Ray-style device database.
    pub device_db_root: String,
    /// The part name (e.g. `"xc7a35tcpg236-1"`), used to locate per-part
    /// tile grid and segbits files under `device_db_root`.
    pub part: String,
    /// Path to the bitstream under analysis (`.bit` or `.bits`).
    pub bitstream_path: String,
    /// Path to the fault bit list to evaluate.
    pub fault_bit_list_path: String,
    /// Upper bound on the number of hops a single net trace may take before
    /// it is abandoned and reported as a `TraceOverflow` diagnostic.
    #[serde(default = "default_trace_depth_bound")]
    pub trace_depth_bound: u32,
    /// Whether bit groups are evaluated in parallel via rayon.
    #[serde(default)]
    pub parallel: bool,
}

fn default_trace_depth_bound() -> u32 {
    4096
}
