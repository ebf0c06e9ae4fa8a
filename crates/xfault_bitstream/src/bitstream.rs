//! The decoded bitstream: a sparse set of configuration-memory words.

use std::collections::HashMap;

/// A decoded Xilinx 7-Series configuration bitstream.
///
/// Internally a sparse map from `(frame address, word index)` to the 32-bit
/// word value written at that location. Both input paths (raw `.bit` and
/// textual `.bits`) converge on this representation.
#[derive(Debug, Clone, Default)]
pub struct Bitstream {
    idcode: Option<u32>,
    words: HashMap<(u32, u8), u32>,
}

impl Bitstream {
    /// Creates an empty bitstream with no IDCODE and no frame data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the part identifier read from the IDCODE register.
    pub fn set_idcode(&mut self, idcode: u32) {
        self.idcode = Some(idcode);
    }

    /// Sets the full 32-bit value at `(frame, word)`, overwriting any prior value.
    pub fn set_word(&mut self, frame: u32, word: u8, value: u32) {
        self.words.insert((frame, word), value);
    }

    /// Sets a single bit at `(frame, word, bit)` to 1, preserving other bits
    /// already recorded at that word.
    pub fn set_bit(&mut self, frame: u32, word: u8, bit: u8) {
        let entry = self.words.entry((frame, word)).or_insert(0);
        *entry |= 1 << bit;
    }

    /// The part identifier derived from the IDCODE packet, if one was seen.
    pub fn part_id(&self) -> Option<u32> {
        self.idcode
    }

    /// Returns the bit value at `(frame, word, bit)`.
    ///
    /// Returns 0 for any coordinate not present in the decoded set; reading
    /// an unwritten location is never an error.
    pub fn get(&self, frame: u32, word: u8, bit: u8) -> u8 {
        self.words
            .get(&(frame, word))
            .map(|w| ((w >> bit) & 1) as u8)
            .unwrap_or(0)
    }

    /// Returns `true` iff any bit in `frame` was written by the
    /// configuration stream.
    ///
    /// This is the bitstream-level half of "defined frame": a frame with no
    /// data here was never touched by the configuration stream at all. The
    /// TileMap layer additionally cross-references the device database's
    /// tile grid to decide whether the part even has a frame at that
    /// address; a frame can be written here and still be `Undefined` at that
    /// layer if the database lists no tile for it.
    pub fn is_defined_frame(&self, frame: u32) -> bool {
        self.words.keys().any(|&(f, _)| f == frame)
    }

    /// Returns an iterator over every `(frame, word)` pair this bitstream
    /// has data for, in no particular order.
    pub fn written_words(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.words.keys().copied()
    }

    /// Encodes this bitstream as sorted `bit_<frame>_<word>_<bit>` lines,
    /// one per set bit — the textual `.bits` round-trip format.
    pub fn to_bits_text(&self) -> String {
        let mut coords: Vec<(u32, u8, u8)> = Vec::new();
        for (&(frame, word), &value) in &self.words {
            for bit in 0..32u8 {
                if (value >> bit) & 1 == 1 {
                    coords.push((frame, word, bit));
                }
            }
        }
        coords.sort_unstable();

        let mut out = String::new();
        for (frame, word, bit) in coords {
            out.push_str(&format!("bit_{frame:08x}_{word:03}_{bit:02}\n"));
        }
        out
    }
}
