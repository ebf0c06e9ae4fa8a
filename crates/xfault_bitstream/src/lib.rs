//! Parsing of Xilinx 7-Series configuration bitstreams.
//!
//! This crate reads a bitstream — either a raw binary `.bit` file (sync
//! word, type-1/type-2 packet stream, FDRI frame writes) or a pre-decoded
//! textual `.bits` file (one set bit per line) — into a [`Bitstream`]: a
//! sparse, queryable set of configuration-memory words. It has no opinion
//! about what those bits mean; that's [`xfault_tilemap`]'s job.

#![warn(missing_docs)]

pub mod bit_parser;
pub mod bits_text;
pub mod bitstream;

pub use bit_parser::parse_bit;
pub use bits_text::parse_bits_text;
pub use bitstream::Bitstream;
