//! Per-tile-type configuration bit placement, relative to a column's frames.

/// Where a tile type's configuration bits live relative to the frame
/// addresses assigned to its column.
///
/// `frame_delta` is the number of frames into the column's frame range
/// this tile type's data begins at; `word_offset`/`word_count` describe
/// the word range within each of those frames. Tile types with no
/// configuration footprint (routing-only overlays) return the empty
/// region (`word_count == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSegment {
    /// Frame offset from the first frame address assigned to the column.
    pub frame_delta: u32,
    /// Word offset within each frame where this tile type's data starts.
    pub word_offset: u32,
    /// Number of 32-bit words per frame used by this tile type.
    pub word_count: u32,
}

impl FrameSegment {
    /// The empty region, used for tile types with no configuration bits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this segment spans no configuration words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_segment_is_empty() {
        assert!(FrameSegment::empty().is_empty());
    }

    #[test]
    fn nonempty_segment_is_not_empty() {
        let seg = FrameSegment {
            frame_delta: 0,
            word_offset: 99,
            word_count: 2,
        };
        assert!(!seg.is_empty());
    }
}
