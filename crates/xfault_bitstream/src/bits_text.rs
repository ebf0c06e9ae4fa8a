//! Parser for the textual `.bits` representation: one set bit per line.
//!
//! Each line has the form `bit_<frame_hex>_<word_decimal>_<bit_decimal>`,
//! matching [`BitCoord`](xfault_common::BitCoord)'s `Display` format. This is
//! the pre-decoded alternative to a raw `.bit` file — useful for fixtures and
//! for tools upstream of this one that already enumerate set bits.

use crate::bitstream::Bitstream;
use xfault_common::{CoreError, XFaultResult};

/// Parses a `.bits` textual file into a [`Bitstream`].
///
/// Blank lines are skipped. Every other line must match
/// `bit_<8 hex digits>_<word>_<bit>`.
///
/// # Errors
///
/// Returns [`CoreError::MalformedInput`] if any non-blank line doesn't match
/// the expected format.
pub fn parse_bits_text(content: &str) -> XFaultResult<Bitstream> {
    let mut bitstream = Bitstream::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (frame, word, bit) = parse_line(line)
            .ok_or_else(|| CoreError::MalformedInput(format!("line {}: '{line}'", line_no + 1)))?;
        bitstream.set_bit(frame, word, bit);
    }

    Ok(bitstream)
}

fn parse_line(line: &str) -> Option<(u32, u8, u8)> {
    let rest = line.strip_prefix("bit_")?;
    let mut parts = rest.split('_');
    let frame = u32::from_str_radix(parts.next()?, 16).ok()?;
    let word: u8 = parts.next()?.parse().ok()?;
    let bit: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((frame, word, bit))
}
