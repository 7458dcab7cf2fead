#![warn(missing_docs)]

//! Utility functions for wirebits.
//!
//! Collaborators of the wire primitives that upper layers consume as black
//! boxes:
//!
//! ## Integrity
//! - CRC32 checksums, composable across split buffers
//! - Packet trailer helpers that append and validate checksums
//!
//! ## Hashing
//! - FNV-1a 32-bit hashes of bytes and strings
//! - MurmurHash64A
//!
//! ## Encoding
//! - Base64 into caller-supplied buffers
//!
//! ## Simulation
//! - Seedable pseudo random helpers (never for security)

/// Base64 transcoding.
pub mod base64;
/// CRC32 checksums.
pub mod checksum;
/// Non-cryptographic hashes.
pub mod hash;
/// Pseudo random helpers for simulation.
pub mod random;

pub use self::base64::{
    base64_decode_data, base64_decode_string, base64_encode_data, base64_encode_string,
    base64_encoded_len,
};
pub use checksum::{
    append_checksum, append_checksum_in_place, calculate_crc32, validate_and_strip_checksum,
};
pub use hash::{hash_data, hash_string, murmur_hash_64, SeededHash};
pub use random::{random_float, random_int};
