//! Aggregate statistics across every bit group evaluated in a run.

use crate::record::{Classification, FaultKind, FaultRecord};
use serde::{Deserialize, Serialize};

/// Counts of fault bits by classification category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCounts {
    /// Bits classified as routing mux row- or column-select.
    pub routing: usize,
    /// Bits classified as site (CLB) configuration.
    pub clb: usize,
    /// Bits classified `Other`/`Unsupported`.
    pub unsupported: usize,
    /// Bits classified `Unknown`.
    pub unknown: usize,
}

/// Counts of evaluated fault kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultKindCounts {
    /// `PipOpen` outcomes.
    pub pip_open: usize,
    /// `PipShort` outcomes.
    pub pip_short: usize,
    /// `CLBAltered` outcomes.
    pub clb_altered: usize,
}

/// Counts of bit-flip directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionCounts {
    /// Bits that flipped from 0 to 1.
    pub zero_to_one: usize,
    /// Bits that flipped from 1 to 0.
    pub one_to_zero: usize,
}

/// Aggregate statistics across every bit group evaluated in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Total number of bit groups evaluated.
    pub bit_groups_total: usize,
    /// Bit groups with at least one significant bit.
    pub bit_groups_with_significant_bit: usize,
    /// Total fault bits evaluated, across every group.
    pub total_fault_bits: usize,
    /// Counts by classification category.
    pub by_classification: ClassificationCounts,
    /// Counts by flip direction.
    pub by_direction: DirectionCounts,
    /// Counts by evaluated fault kind.
    pub by_fault_kind: FaultKindCounts,
}

/// One bit group's evaluated records plus its summary line: `Bits: <n>`,
/// `Errors Found: <k> (<p>%)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Index of this group within the run's input order.
    pub group_index: usize,
    /// Every bit's evaluated record, in input order.
    pub records: Vec<FaultRecord>,
    /// Total bits evaluated in this group.
    pub bits_total: usize,
    /// Significant bits found in this group.
    pub errors_found: usize,
    /// `errors_found / bits_total * 100`.
    pub percentage: f64,
}

impl GroupReport {
    /// Builds a group report from a group's evaluated records.
    pub fn new(group_index: usize, records: Vec<FaultRecord>) -> Self {
        let (bits_total, errors_found, percentage) = Statistics::group_summary(&records);
        Self {
            group_index,
            records,
            bits_total,
            errors_found,
            percentage,
        }
    }
}

impl Statistics {
    /// Folds one bit group's evaluated records into the running totals.
    pub fn accumulate(&mut self, records: &[FaultRecord]) {
        self.bit_groups_total += 1;
        if records.iter().any(|r| r.kind.is_significant()) {
            self.bit_groups_with_significant_bit += 1;
        }

        for record in records {
            self.total_fault_bits += 1;

            match record.classification {
                Classification::MuxRow | Classification::MuxCol => self.by_classification.routing += 1,
                Classification::SiteInit => self.by_classification.clb += 1,
                Classification::Other => self.by_classification.unsupported += 1,
                Classification::Unknown => self.by_classification.unknown += 1,
                Classification::Undefined => {}
            }

            if record.new && !record.prev {
                self.by_direction.zero_to_one += 1;
            } else if record.prev && !record.new {
                self.by_direction.one_to_zero += 1;
            }

            match &record.kind {
                FaultKind::PipOpen { .. } => self.by_fault_kind.pip_open += 1,
                FaultKind::PipShort { .. } => self.by_fault_kind.pip_short += 1,
                FaultKind::CLBAltered { .. } => self.by_fault_kind.clb_altered += 1,
                _ => {}
            }
        }
    }

    /// Returns the group summary `(bits_total, errors_found, percentage)`
    /// for one bit group's records.
    pub fn group_summary(records: &[FaultRecord]) -> (usize, usize, f64) {
        let bits_total = records.len();
        let errors_found = records.iter().filter(|r| r.kind.is_significant()).count();
        let percentage = if bits_total == 0 {
            0.0
        } else {
            100.0 * errors_found as f64 / bits_total as f64
        };
        (bits_total, errors_found, percentage)
    }
}
