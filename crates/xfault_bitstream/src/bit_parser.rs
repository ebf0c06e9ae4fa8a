//! Parser for raw Xilinx `.bit` files.
//!
//! A `.bit` file is a TLV header followed by a synchronized stream of
//! type-1/type-2 configuration packets. This reads that packet stream and
//! replays the frame writes it describes into a [`Bitstream`], the inverse
//! of how the teacher's `xilinx::bit::write_bit` assembles one.

use crate::bitstream::Bitstream;
use xfault_common::{CoreError, XFaultResult};

/// Xilinx sync word marking the start of the configuration command stream.
const SYNC_WORD: u32 = 0xAA99_5566;

/// Command register.
const REG_CMD: u32 = 0x04;
/// Frame Address Register.
const REG_FAR: u32 = 0x01;
/// Frame Data Register Input.
const REG_FDRI: u32 = 0x02;
/// IDCODE register (UG470 register 12).
const REG_IDCODE: u32 = 0x0C;

/// Desync command value, ending the configuration sequence.
const CMD_DESYNC: u32 = 0x0D;

/// Number of 32-bit words per configuration frame on 7-Series devices.
const FRAME_WORDS: u32 = 101;

/// Parses a raw `.bit` file into a [`Bitstream`].
///
/// # Errors
///
/// Returns [`CoreError::MalformedInput`] if no sync word is found, or if a
/// type-1 FDRI header with a zero word count isn't followed by a type-2
/// header.
pub fn parse_bit(data: &[u8]) -> XFaultResult<Bitstream> {
    let words = words_after_sync(data)?;

    let mut bitstream = Bitstream::new();
    let mut far: u32 = 0;
    let mut frame_word: u32 = 0;

    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        i += 1;
        match word >> 29 {
            0b001 => {
                // Type 1 packet.
                let reg = (word >> 13) & 0x1F;
                let count = (word & 0x7FF) as usize;

                if reg == REG_FDRI && count == 0 {
                    let type2 = *words.get(i).ok_or_else(|| {
                        CoreError::MalformedInput(
                            "type-1 FDRI header with zero count not followed by a word"
                                .to_string(),
                        )
                    })?;
                    i += 1;
                    if type2 >> 29 != 0b101 {
                        return Err(CoreError::MalformedInput(
                            "expected type-2 packet after zero-count FDRI header".to_string(),
                        ));
                    }
                    let type2_count = (type2 & 0x03FF_FFFF) as usize;
                    let end = (i + type2_count).min(words.len());
                    write_fdri(&mut bitstream, &mut far, &mut frame_word, &words[i..end]);
                    i = end;
                    continue;
                }

                let end = (i + count).min(words.len());
                let payload = &words[i..end];
                i = end;

                match reg {
                    REG_FAR => {
                        if let Some(&v) = payload.first() {
                            far = v;
                            frame_word = 0;
                        }
                    }
                    REG_IDCODE => {
                        if let Some(&v) = payload.first() {
                            bitstream.set_idcode(v);
                        }
                    }
                    REG_FDRI => write_fdri(&mut bitstream, &mut far, &mut frame_word, payload),
                    REG_CMD => {
                        if payload.first() == Some(&CMD_DESYNC) {
                            break;
                        }
                    }
                    _ => {}
                }
            }
            0b101 => {
                // A stray type-2 packet with no preceding type-1 header: skip its payload.
                let count = (word & 0x03FF_FFFF) as usize;
                i = (i + count).min(words.len());
            }
            _ => {
                // NOOP or reserved encoding: single-word, nothing to do.
            }
        }
    }

    Ok(bitstream)
}

/// Writes sequential FDRI payload words into frames, rolling over to the
/// next frame address every [`FRAME_WORDS`] words, mirroring how the
/// configuration logic auto-increments FAR during a burst FDRI write.
fn write_fdri(bitstream: &mut Bitstream, far: &mut u32, frame_word: &mut u32, payload: &[u32]) {
    for &value in payload {
        bitstream.set_word(*far, *frame_word as u8, value);
        *frame_word += 1;
        if *frame_word >= FRAME_WORDS {
            *frame_word = 0;
            *far += 1;
        }
    }
}

/// Locates the sync word and returns the big-endian u32 words that follow it.
fn words_after_sync(data: &[u8]) -> XFaultResult<Vec<u32>> {
    let sync_bytes = SYNC_WORD.to_be_bytes();
    let pos = data
        .windows(4)
        .position(|w| w == sync_bytes)
        .ok_or_else(|| CoreError::MalformedInput("sync word 0xAA995566 not found".to_string()))?;

    let body = &data[pos + 4..];
    Ok(body
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type1_write(reg: u32, count: u32) -> u32 {
        0x3000_0000 | (reg << 13) | (count & 0x7FF)
    }

    fn build_minimal_bit(far: u32, frame_words: &[u32], idcode: Option<u32>) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&SYNC_WORD.to_be_bytes());
        data.extend_from_slice(&0x2000_0000u32.to_be_bytes()); // NOOP

        if let Some(id) = idcode {
            data.extend_from_slice(&type1_write(REG_IDCODE, 1).to_be_bytes());
            data.extend_from_slice(&id.to_be_bytes());
        }

        data.extend_from_slice(&type1_write(REG_FAR, 1).to_be_bytes());
        data.extend_from_slice(&far.to_be_bytes());

        data.extend_from_slice(&type1_write(REG_FDRI, frame_words.len() as u32).to_be_bytes());
        for w in frame_words {
            data.extend_from_slice(&w.to_be_bytes());
        }

        data.extend_from_slice(&type1_write(REG_CMD, 1).to_be_bytes());
        data.extend_from_slice(&CMD_DESYNC.to_be_bytes());

        data
    }

    #[test]
    fn missing_sync_word_is_malformed() {
        let result = parse_bit(&[0, 1, 2, 3]);
        assert!(matches!(result, Err(CoreError::MalformedInput(_))));
    }

    #[test]
    fn reads_idcode() {
        let data = build_minimal_bit(0, &[0xDEAD_BEEF], Some(0x0362_D093));
        let bs = parse_bit(&data).unwrap();
        assert_eq!(bs.part_id(), Some(0x0362_D093));
    }

    #[test]
    fn reads_frame_data_at_far() {
        let data = build_minimal_bit(0x100, &[0x0000_0001, 0x0000_0002], None);
        let bs = parse_bit(&data).unwrap();
        assert_eq!(bs.get(0x100, 0, 0), 1);
        assert_eq!(bs.get(0x100, 1, 1), 1);
    }

    #[test]
    fn fdri_rolls_over_to_next_frame() {
        let words: Vec<u32> = (0..FRAME_WORDS + 1).map(|_| 0x0000_0001).collect();
        let data = build_minimal_bit(0x10, &words, None);
        let bs = parse_bit(&data).unwrap();
        assert!(bs.is_defined_frame(0x10));
        assert!(bs.is_defined_frame(0x11));
        assert_eq!(bs.get(0x11, 0, 0), 1);
    }

    #[test]
    fn undefined_frame_is_not_present() {
        let data = build_minimal_bit(0x100, &[0x1], None);
        let bs = parse_bit(&data).unwrap();
        assert!(!bs.is_defined_frame(0x999));
    }

    #[test]
    fn stops_at_desync() {
        let mut data = build_minimal_bit(0x100, &[0x1], None);
        // Append a trailing FAR write after DESYNC that must be ignored.
        data.extend_from_slice(&type1_write(REG_FAR, 1).to_be_bytes());
        data.extend_from_slice(&0xFFFFu32.to_be_bytes());
        let bs = parse_bit(&data).unwrap();
        assert!(!bs.is_defined_frame(0xFFFF));
    }
}
