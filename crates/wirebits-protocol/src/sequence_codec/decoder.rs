//! Packet sequence decompression.

use std::io::{self, Read};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use wirebits_core::{
    constants::MAX_SEQUENCE_PAYLOAD_BYTES,
    error::{ErrorKind, Result},
};

use super::{encoder::sequence_payload_len, COUNT_SHIFT, INLINE_MASK};

/// Returns the number of payload bytes that follow `prefix`.
///
/// # Errors
/// [`ErrorKind::UnknownSequencePrefix`] for a prefix the compressor never
/// produces: a count above 8, or a count of 8 with inline bits set.
pub fn get_packet_sequence_bytes(prefix: u8) -> Result<usize> {
    let len = usize::from(prefix >> COUNT_SHIFT);
    let inline = prefix & INLINE_MASK;
    if len > MAX_SEQUENCE_PAYLOAD_BYTES || (len == MAX_SEQUENCE_PAYLOAD_BYTES && inline != 0) {
        tracing::trace!("rejecting packet sequence prefix {:#04x}", prefix);
        return Err(ErrorKind::UnknownSequencePrefix(prefix));
    }
    Ok(len)
}

/// Reconstructs a packet sequence from its prefix byte and payload.
///
/// Bytes past the announced payload length are ignored. Every sequence has
/// exactly one accepted encoding: the one [`compress_packet_sequence`]
/// produces.
///
/// [`compress_packet_sequence`]: super::encoder::compress_packet_sequence
///
/// # Errors
/// [`ErrorKind::UnknownSequencePrefix`] for an invalid prefix,
/// [`ErrorKind::TruncatedSequence`] when `bytes` is shorter than the payload
/// and [`ErrorKind::NonCanonicalSequence`] when the value fits a shorter
/// encoding.
pub fn decompress_packet_sequence(prefix: u8, bytes: &[u8]) -> Result<u64> {
    let len = get_packet_sequence_bytes(prefix)?;
    if bytes.len() < len {
        tracing::trace!(
            "truncated packet sequence: prefix {:#04x} needs {} bytes, got {}",
            prefix,
            len,
            bytes.len()
        );
        return Err(ErrorKind::TruncatedSequence {
            expected: len,
            actual: bytes.len(),
        });
    }

    let inline = u64::from(prefix & INLINE_MASK);
    let sequence = match len {
        0 => inline,
        MAX_SEQUENCE_PAYLOAD_BYTES => LittleEndian::read_u64(bytes),
        _ => (inline << (8 * len)) | LittleEndian::read_uint(bytes, len),
    };
    if sequence_payload_len(sequence) != len {
        tracing::trace!(
            "non-canonical packet sequence {:#x} under prefix {:#04x}",
            sequence,
            prefix
        );
        return Err(ErrorKind::NonCanonicalSequence(prefix));
    }
    Ok(sequence)
}

/// Reads a prefix byte and payload from the front of `buf`.
///
/// Returns the sequence and the number of bytes consumed.
pub fn decompress_packet_sequence_from(buf: &[u8]) -> Result<(u64, usize)> {
    let (&prefix, payload) = buf.split_first().ok_or(ErrorKind::TruncatedSequence {
        expected: 1,
        actual: 0,
    })?;
    let sequence = decompress_packet_sequence(prefix, payload)?;
    // The prefix was validated by the call above.
    let len = usize::from(prefix >> COUNT_SHIFT);
    Ok((sequence, 1 + len))
}

/// Reads a compressed packet sequence from `reader`.
///
/// Invalid prefixes surface as [`io::ErrorKind::InvalidData`].
pub fn read_packet_sequence<R: Read>(reader: &mut R) -> io::Result<u64> {
    let prefix = reader.read_u8()?;
    let len = get_packet_sequence_bytes(prefix).map_err(invalid_data)?;
    let mut bytes = [0u8; MAX_SEQUENCE_PAYLOAD_BYTES];
    reader.read_exact(&mut bytes[..len])?;
    decompress_packet_sequence(prefix, &bytes[..len]).map_err(invalid_data)
}

fn invalid_data(err: ErrorKind) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}
