//! Optional parallel evaluation across bit groups.
//!
//! Each bit group is evaluated independently: the [`TileMap`] and
//! [`DesignModel`] are read-only shared references, and each group's
//! [`TileMap::with_flips`] produces its own overlay view, so no two threads
//! ever observe another's flips.

use crate::evaluator::evaluate_group;
use crate::record::FaultRecord;
use rayon::prelude::*;
use xfault_common::BitCoord;
use xfault_design::DesignModel;
use xfault_diagnostics::DiagnosticSink;
use xfault_tilemap::TileMap;

/// Evaluates every bit group in `groups` concurrently, returning results in
/// input order. `diagnostics` is safe to share across threads; per-bit
/// diagnostic locations still carry the correct group/bit index regardless
/// of evaluation order.
pub fn evaluate_groups_parallel(
    tile_map: &TileMap,
    design: &DesignModel,
    groups: &[Vec<BitCoord>],
    depth_bound: Option<u32>,
    diagnostics: &DiagnosticSink,
) -> Vec<Vec<FaultRecord>> {
    groups
        .par_iter()
        .enumerate()
        .map(|(group_index, group)| {
            evaluate_group(tile_map, design, group, group_index, depth_bound, diagnostics)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_group as serial_evaluate_group;
    use std::fs;
    use std::path::{Path, PathBuf};
    use xfault_bitstream::Bitstream;
    use xfault_devicedb::DeviceDB;

    fn tempdir(suffix: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "xfault_eval_parallel_test_{}_{suffix}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn build_fixture_db(dir: &Path) -> DeviceDB {
        let part_dir = dir.join("xc7a35t");
        fs::create_dir_all(&part_dir).unwrap();
        fs::write(
            part_dir.join("tilegrid.json"),
            r#"{
                "CLBLL_L_X0Y0": {
                    "bits": {
                        "CLB_IO_CLK": {
                            "baseaddr": "0x00030000",
                            "frames": 36,
                            "offset": 0,
                            "words": 1
                        }
                    },
                    "grid_x": 1,
                    "grid_y": 1,
                    "type": "CLBLL_L",
                    "sites": { "SLICE_X0Y0": "SLICEL" }
                }
            }"#,
        )
        .unwrap();
        fs::write(
            part_dir.join("segbits_clbll_l.db"),
            "CLBLL_L.SLICEL_X0.ALUT.INIT[00] 00_0\nCLBLL_L.SLICEL_X0.ALUT.INIT[01] 00_1\n",
        )
        .unwrap();
        fs::write(
            part_dir.join("tile_type_CLBLL_L.json"),
            r#"{"pips": [], "wires": [], "site_pins": {}}"#,
        )
        .unwrap();
        DeviceDB::load(dir, "xc7a35t").unwrap()
    }

    #[test]
    fn parallel_matches_serial_evaluation() {
        let tmp = tempdir("parity");
        let db = build_fixture_db(&tmp);
        let tilemap = TileMap::build(&db, Bitstream::new());
        let design = DesignModel::new();

        let groups = vec![
            vec![BitCoord::new(0x00030000, 0, 0)],
            vec![BitCoord::new(0x00030000, 0, 1)],
        ];

        let sink_a = DiagnosticSink::new();
        let parallel_results = evaluate_groups_parallel(&tilemap, &design, &groups, None, &sink_a);

        let sink_b = DiagnosticSink::new();
        let serial_results: Vec<_> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| serial_evaluate_group(&tilemap, &design, g, i, None, &sink_b))
            .collect();

        assert_eq!(parallel_results, serial_results);
    }
}
