#![warn(missing_docs)]

//! wirebits-protocol: the exact wire primitives of the protocol.
//!
//! Everything here is a pure function over integers and caller-owned
//! buffers: no I/O, no allocation, no shared state.

/// Bit widths of bounded integer ranges.
pub mod bits;
/// Byte swapping and host/network normalization.
pub mod byte_order;
/// Wrap-aware ordering of 16-bit sequence numbers.
pub mod sequence;
/// Variable-length packet sequence compression.
pub mod sequence_codec;
/// Zig-zag signed/unsigned mapping.
pub mod zigzag;

pub use bits::{bits_required, bits_required_const, BitsRequired};
pub use byte_order::{bswap, host_to_network, network_to_host, ByteSwap};
pub use sequence::{
    sequence_cmp, sequence_difference, sequence_greater_than, sequence_less_than, SequenceNumber,
};
pub use sequence_codec::{
    compress_packet_sequence, compress_packet_sequence_into, decompress_packet_sequence,
    decompress_packet_sequence_from, get_packet_sequence_bytes, CompressedSequence,
};
pub use zigzag::{signed_to_unsigned, unsigned_to_signed};
