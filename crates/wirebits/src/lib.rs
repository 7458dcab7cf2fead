#![warn(missing_docs)]

//! Wirebits: a small public API facade for the workspace.
//!
//! This crate re-exports the primitives a packet-oriented protocol is built
//! from:
//!
//! - Bit widths of bounded ranges (`bits_required`, `BitsRequired`)
//! - Wire byte order (`host_to_network`, `network_to_host`)
//! - Zig-zag deltas (`signed_to_unsigned`, `unsigned_to_signed`)
//! - Wrap-aware sequence ordering (`sequence_greater_than`, ...)
//! - Packet sequence compression (`compress_packet_sequence`, ...)
//! - Checksums, hashes and Base64 from the utilities crate
//!
//! Example
//! ```
//! use wirebits::prelude::*;
//!
//! let mut header = [0u8; 16];
//! let written = compress_packet_sequence_into(70_000, &mut header).unwrap();
//! let (sequence, consumed) = decompress_packet_sequence_from(&header[..written]).unwrap();
//! assert_eq!((sequence, consumed), (70_000, written));
//!
//! assert!(sequence_greater_than(0, 65535));
//! assert_eq!(bits_required(0, 63).unwrap(), 6);
//! ```

// Core configuration and errors
pub use wirebits_core::{
    config::{Config, Endianness, HOST_BYTE_ORDER, WIRE_BYTE_ORDER},
    constants,
    error::{DecodingErrorKind, ErrorKind, Result},
};
// Protocol primitives
pub use wirebits_protocol::{
    bits, bits_required, bits_required_const, bswap, byte_order, compress_packet_sequence,
    compress_packet_sequence_into, decompress_packet_sequence, decompress_packet_sequence_from,
    get_packet_sequence_bytes, host_to_network, network_to_host, sequence, sequence_cmp,
    sequence_codec, sequence_difference, sequence_greater_than, sequence_less_than,
    signed_to_unsigned, unsigned_to_signed, zigzag, BitsRequired, ByteSwap, CompressedSequence,
    SequenceNumber,
};
// Checksums, hashes, Base64
pub use wirebits_utilities::{
    append_checksum, append_checksum_in_place, base64_decode_data, base64_decode_string,
    base64_encode_data, base64_encode_string, base64_encoded_len, calculate_crc32, hash_data,
    hash_string, murmur_hash_64, validate_and_strip_checksum, SeededHash,
};
/// Pseudo random helpers for network simulation.
pub use wirebits_utilities::random;

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{
        bits_required, compress_packet_sequence, compress_packet_sequence_into,
        decompress_packet_sequence, decompress_packet_sequence_from, get_packet_sequence_bytes,
        host_to_network, network_to_host, sequence_greater_than, sequence_less_than,
        signed_to_unsigned, unsigned_to_signed, ByteSwap, CompressedSequence, Config, ErrorKind,
        SeededHash, SequenceNumber,
    };
}
