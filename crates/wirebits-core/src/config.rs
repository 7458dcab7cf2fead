use crate::constants::HASH_SEED_DEFAULT;

/// Byte order of multi-byte integers.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

/// Byte order of the machine this crate was built for.
///
/// Resolved once at compile time; it never changes for the lifetime of a build.
pub const HOST_BYTE_ORDER: Endianness = if cfg!(target_endian = "big") {
    Endianness::Big
} else {
    Endianness::Little
};

/// Byte order agreed between endpoints for integers on the wire.
pub const WIRE_BYTE_ORDER: Endianness = Endianness::Little;

/// Returns true when host integers must be byte-swapped to reach wire order.
pub const fn needs_byte_swap() -> bool {
    !matches!(
        (HOST_BYTE_ORDER, WIRE_BYTE_ORDER),
        (Endianness::Little, Endianness::Little) | (Endianness::Big, Endianness::Big)
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Seeds used by the integrity and hashing helpers.
///
/// Both endpoints must agree on these values, otherwise checksums and
/// hashed keys will not match across the wire.
pub struct Config {
    /// Initial CRC32 value used when appending or validating packet checksums.
    pub checksum_seed: u32,
    /// Seed for the 32-bit data and string hashes.
    pub hash_seed: u32,
    /// Seed for the 64-bit murmur hash.
    pub murmur_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checksum_seed: 0,
            hash_seed: HASH_SEED_DEFAULT,
            murmur_seed: 0,
        }
    }
}
