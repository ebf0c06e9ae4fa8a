//! Bitstream coordinate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit configuration frame address.
///
/// A thin newtype (not a bare `u32`) so frame addresses sort and hash
/// distinctly from word offsets and bit positions, mirroring the teacher's
/// `FrameAddress` in the bitstream-writer crate this one replaces.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct FrameAddress(u32);

impl FrameAddress {
    /// Creates a frame address from a raw `u32`.
    pub fn from_raw(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw `u32` frame address.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FrameAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// A single bitstream coordinate: `(frame, word, bit)`.
///
/// Globally unique within a bitstream. `word` indexes a 32-bit word within
/// the frame; `bit` indexes a bit within that word.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct BitCoord {
    /// Frame address.
    pub frame: FrameAddress,
    /// Word index within the frame (0-based).
    pub word: u8,
    /// Bit index within the word (0-based, 0..=31).
    pub bit: u8,
}

impl BitCoord {
    /// Creates a new bit coordinate from a raw frame address, word, and bit index.
    pub fn new(frame: u32, word: u8, bit: u8) -> Self {
        Self {
            frame: FrameAddress::from_raw(frame),
            word,
            bit,
        }
    }
}

impl fmt::Display for BitCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit_{}_{:03}_{:02}", self.frame, self.word, self.bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_address_roundtrip() {
        let f = FrameAddress::from_raw(0x00402b22);
        assert_eq!(f.as_raw(), 0x00402b22);
    }

    #[test]
    fn frame_address_display() {
        let f = FrameAddress::from_raw(0x00402b22);
        assert_eq!(format!("{f}"), "00402b22");
    }

    #[test]
    fn frame_address_ordering() {
        let mut addrs = vec![
            FrameAddress::from_raw(3),
            FrameAddress::from_raw(1),
            FrameAddress::from_raw(2),
        ];
        addrs.sort();
        assert_eq!(
            addrs,
            vec![
                FrameAddress::from_raw(1),
                FrameAddress::from_raw(2),
                FrameAddress::from_raw(3)
            ]
        );
    }

    #[test]
    fn bitcoord_display_matches_bits_format() {
        let c = BitCoord::new(0x00402b22, 7, 15);
        assert_eq!(format!("{c}"), "bit_00402b22_007_15");
    }

    #[test]
    fn bitcoord_equality_and_hash() {
        use std::collections::HashSet;
        let a = BitCoord::new(1, 2, 3);
        let b = BitCoord::new(1, 2, 3);
        let c = BitCoord::new(1, 2, 4);
        assert_eq!(a, b);
        assert_ne!(a, c);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn bitcoord_scenario_s1() {
        let c = BitCoord::new(0x00402b22, 7, 15);
        assert_eq!(format!("{c}"), "bit_00402b22_007_15");
    }
}
