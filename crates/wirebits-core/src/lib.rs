#![warn(missing_docs)]

//! wirebits-core: foundational types shared by the wire primitives.
//!
//! This crate provides the minimal set of items every other layer depends on:
//! - Protocol constants
//! - Build-time byte order and runtime configuration
//! - Error handling
//!
//! The primitives themselves live in specialized crates:
//! - `wirebits-protocol`: bit widths, byte order, zig-zag, sequence ordering and compression
//! - `wirebits-utilities`: checksums, hashes, Base64, simulation random

/// Protocol constants shared across layers.
pub mod constants {
    /// Half of the 16-bit sequence space.
    ///
    /// Two sequence numbers at most this far apart keep their linear order;
    /// anything further apart is treated as having wrapped.
    pub const SEQUENCE_HALF_RANGE: u16 = 32768;
    /// Maximum number of payload bytes following a compressed sequence prefix.
    pub const MAX_SEQUENCE_PAYLOAD_BYTES: usize = 8;
    /// Maximum size of a compressed packet sequence (prefix + payload).
    pub const MAX_COMPRESSED_SEQUENCE_SIZE: usize = 1 + MAX_SEQUENCE_PAYLOAD_BYTES;
    /// The size of the CRC32 trailer appended to checksummed packets.
    pub const CHECKSUM_SIZE: usize = 4;
    /// Default seed for the 32-bit data/string hash (FNV-1a offset basis).
    pub const HASH_SEED_DEFAULT: u32 = 0x811C_9DC5;
}

/// Build-time byte order and runtime configuration.
pub mod config;
/// Error types and results.
pub mod error;

pub use config::{Config, Endianness, HOST_BYTE_ORDER, WIRE_BYTE_ORDER};
pub use error::{DecodingErrorKind, ErrorKind, Result};
