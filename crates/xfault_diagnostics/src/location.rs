//! Locations for diagnostics in this domain: a position within the input
//! fault bit list, not a source-text span (there is no parsed source text).

use serde::{Deserialize, Serialize};

/// Identifies a bit within the ordered input fault bit list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    /// Index of the bit group (0-based, in input order).
    pub group_index: usize,
    /// Index of the bit within the group (0-based, in input order).
    pub bit_index: usize,
}

impl Location {
    /// Creates a new location.
    pub fn new(group_index: usize, bit_index: usize) -> Self {
        Self {
            group_index,
            bit_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let loc = Location::new(3, 1);
        assert_eq!(loc.group_index, 3);
        assert_eq!(loc.bit_index, 1);
    }

    #[test]
    fn equality() {
        assert_eq!(Location::new(1, 2), Location::new(1, 2));
        assert_ne!(Location::new(1, 2), Location::new(1, 3));
    }
}
