//! CRC32 checksum utilities for data integrity verification.

use crc32fast::Hasher;
use wirebits_core::{
    config::Config,
    constants::CHECKSUM_SIZE,
    error::{ErrorKind, Result},
};

/// Computes the IEEE CRC32 of `buffer`, continuing from `crc32`.
///
/// Pass 0 to start a new checksum. Checksums compose across split buffers:
/// `calculate_crc32(b, calculate_crc32(a, 0))` equals the checksum of `a`
/// followed by `b`.
pub fn calculate_crc32(buffer: &[u8], crc32: u32) -> u32 {
    let mut hasher = Hasher::new_with_initial(crc32);
    hasher.update(buffer);
    hasher.finalize()
}

/// Appends a CRC32 checksum to the encoded packet data.
/// Returns a new vector with the checksum appended.
pub fn append_checksum(data: &[u8], config: &Config) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    result.extend_from_slice(data);
    append_checksum_in_place(&mut result, config);
    result
}

/// Appends a CRC32 checksum to the provided buffer in-place.
pub fn append_checksum_in_place(data: &mut Vec<u8>, config: &Config) {
    let checksum = calculate_crc32(data, config.checksum_seed);
    data.extend_from_slice(&checksum.to_le_bytes());
}

/// Validates and strips the CRC32 checksum from packet data.
/// Returns the data without checksum if valid, or an error if checksum fails.
pub fn validate_and_strip_checksum<'a>(data: &'a [u8], config: &Config) -> Result<&'a [u8]> {
    if data.len() < CHECKSUM_SIZE {
        return Err(ErrorKind::ReceivedDataTooShort);
    }

    let (payload, checksum_bytes) = data.split_at(data.len() - CHECKSUM_SIZE);
    let received_checksum = u32::from_le_bytes([
        checksum_bytes[0],
        checksum_bytes[1],
        checksum_bytes[2],
        checksum_bytes[3],
    ]);

    let computed_checksum = calculate_crc32(payload, config.checksum_seed);
    if received_checksum != computed_checksum {
        tracing::warn!(
            "CRC32 checksum mismatch: expected {:#010x}, got {:#010x}",
            computed_checksum,
            received_checksum
        );
        return Err(ErrorKind::ChecksumMismatch {
            expected: computed_checksum,
            actual: received_checksum,
        });
    }

    Ok(payload)
}
