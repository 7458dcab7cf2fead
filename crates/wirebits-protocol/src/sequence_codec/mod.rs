//! Variable-length compression of 64-bit packet sequence numbers.
//!
//! A sequence is sent as one prefix byte followed by 0 to 8 payload bytes:
//!
//! ```text
//! ┌───────────────────────────┬──────────────────────────────┐
//! │ Prefix (1B)               │ Payload (n bytes, LE)        │
//! │ high nibble: n (0..=8)    │ low 8n bits of the sequence  │
//! │ low nibble:  bits 8n..8n+4│                              │
//! └───────────────────────────┴──────────────────────────────┘
//! ```
//!
//! `n` is the smallest count for which the sequence fits in `8n + 4` bits,
//! so sequences below 16 cost a single byte. Sequences of 2^60 and above
//! use `n = 8` with a zero low nibble. Encoded size never shrinks as the
//! sequence grows:
//!
//! | Sequence range      | Payload bytes |
//! |---------------------|---------------|
//! | `[0, 2^4)`          | 0             |
//! | `[2^4, 2^12)`       | 1             |
//! | `[2^12, 2^20)`      | 2             |
//! | `[2^(8n-4), 2^(8n+4))` | n          |
//! | `[2^60, 2^64)`      | 8             |
//!
//! # Module Organization
//!
//! - [`encoder`] - Sequence compression into prefix + payload
//! - [`decoder`] - Prefix inspection and sequence decompression

pub mod decoder;
pub mod encoder;


/// Bit position of the payload count inside the prefix byte.
pub(crate) const COUNT_SHIFT: u32 = 4;
/// Mask selecting the sequence bits carried inline by the prefix byte.
pub(crate) const INLINE_MASK: u8 = 0x0F;
/// Number of sequence bits carried inline by the prefix byte.
pub(crate) const INLINE_BITS: u32 = 4;

pub use decoder::{
    decompress_packet_sequence, decompress_packet_sequence_from, get_packet_sequence_bytes,
    read_packet_sequence,
};
pub use encoder::{
    compress_packet_sequence, compress_packet_sequence_into, sequence_payload_len,
    write_packet_sequence, CompressedSequence,
};
