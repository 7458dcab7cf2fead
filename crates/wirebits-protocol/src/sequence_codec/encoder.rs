//! Packet sequence compression.

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use wirebits_core::{
    constants::MAX_SEQUENCE_PAYLOAD_BYTES,
    error::{ErrorKind, Result},
};

use super::{COUNT_SHIFT, INLINE_BITS};

/// A packet sequence compressed for the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompressedSequence {
    prefix: u8,
    len: usize,
    bytes: [u8; MAX_SEQUENCE_PAYLOAD_BYTES],
}

impl CompressedSequence {
    /// The prefix byte announcing the payload length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The payload bytes that follow the prefix.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of payload bytes following the prefix.
    pub fn payload_len(&self) -> usize {
        self.len
    }

    /// Total encoded size including the prefix byte.
    pub fn wire_size(&self) -> usize {
        1 + self.len
    }
}

/// Number of payload bytes `sequence` compresses to.
pub fn sequence_payload_len(sequence: u64) -> usize {
    let significant = u64::BITS - sequence.leading_zeros();
    if significant <= INLINE_BITS {
        0
    } else {
        ((significant - INLINE_BITS + 7) / 8) as usize
    }
}

/// Compresses a packet sequence into a prefix byte and its payload.
///
/// # Examples
/// ```
/// use wirebits_protocol::sequence_codec::compress_packet_sequence;
///
/// let small = compress_packet_sequence(9);
/// assert_eq!(small.prefix(), 0x09);
/// assert!(small.payload().is_empty());
///
/// let large = compress_packet_sequence(0x56789);
/// assert_eq!(large.prefix(), 0x25);
/// assert_eq!(large.payload(), &[0x89, 0x67]);
/// ```
pub fn compress_packet_sequence(sequence: u64) -> CompressedSequence {
    let len = sequence_payload_len(sequence);
    let mut bytes = [0u8; MAX_SEQUENCE_PAYLOAD_BYTES];
    LittleEndian::write_u64(&mut bytes, sequence);

    let inline = if len == MAX_SEQUENCE_PAYLOAD_BYTES {
        0
    } else {
        (sequence >> (8 * len)) as u8
    };

    CompressedSequence {
        prefix: ((len as u8) << COUNT_SHIFT) | inline,
        len,
        bytes,
    }
}

/// Compresses a packet sequence into `dst` and returns the bytes written.
///
/// # Errors
/// [`ErrorKind::BufferTooSmall`] when `dst` cannot hold the prefix and payload.
pub fn compress_packet_sequence_into(sequence: u64, dst: &mut [u8]) -> Result<usize> {
    let compressed = compress_packet_sequence(sequence);
    let size = compressed.wire_size();
    if dst.len() < size {
        return Err(ErrorKind::BufferTooSmall {
            needed: size,
            capacity: dst.len(),
        });
    }
    dst[0] = compressed.prefix;
    dst[1..size].copy_from_slice(compressed.payload());
    Ok(size)
}

/// Writes a compressed packet sequence to `writer` and returns the bytes written.
pub fn write_packet_sequence<W: Write>(writer: &mut W, sequence: u64) -> io::Result<usize> {
    let compressed = compress_packet_sequence(sequence);
    writer.write_u8(compressed.prefix)?;
    writer.write_all(compressed.payload())?;
    Ok(compressed.wire_size())
}
