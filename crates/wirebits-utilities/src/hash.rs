//! Non-cryptographic hashes for hash-table keys and fingerprints.
//!
//! None of these resist deliberate collisions. Use them for lookups and
//! change detection, never for authentication.

use byteorder::{ByteOrder, LittleEndian};
use wirebits_core::config::Config;

const FNV_PRIME: u32 = 0x0100_0193;

const MURMUR_M: u64 = 0xc6a4_a793_5bd1_e995;
const MURMUR_R: u32 = 47;

/// 32-bit FNV-1a hash of `data`, continuing from `hash`.
///
/// Start from [`HASH_SEED_DEFAULT`](wirebits_core::constants::HASH_SEED_DEFAULT)
/// for the standard FNV-1a value. Hashes chain, so hashing `a` then `b`
/// equals hashing `a` followed by `b`.
pub fn hash_data(data: &[u8], hash: u32) -> u32 {
    data.iter()
        .fold(hash, |hash, &byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

/// 32-bit FNV-1a hash of a string, continuing from `hash`.
///
/// Only the bytes before the first NUL are hashed, matching strings that
/// crossed a C boundary with their terminator.
pub fn hash_string(string: &str, hash: u32) -> u32 {
    let bytes = string.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    hash_data(&bytes[..end], hash)
}

/// 64-bit MurmurHash64A of `key` with the given `seed`.
///
/// Words are read little-endian so the digest is identical on every host.
pub fn murmur_hash_64(key: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (key.len() as u64).wrapping_mul(MURMUR_M);

    let mut chunks = key.chunks_exact(8);
    for chunk in &mut chunks {
        let mut k = LittleEndian::read_u64(chunk);
        k = k.wrapping_mul(MURMUR_M);
        k ^= k >> MURMUR_R;
        k = k.wrapping_mul(MURMUR_M);

        h ^= k;
        h = h.wrapping_mul(MURMUR_M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &byte) in tail.iter().enumerate() {
            h ^= u64::from(byte) << (8 * i);
        }
        h = h.wrapping_mul(MURMUR_M);
    }

    h ^= h >> MURMUR_R;
    h = h.wrapping_mul(MURMUR_M);
    h ^= h >> MURMUR_R;
    h
}

/// Hashing with the seeds agreed in a [`Config`].
pub trait SeededHash {
    /// [`hash_data`] seeded with the configured hash seed.
    fn hash_data(&self, data: &[u8]) -> u32;
    /// [`hash_string`] seeded with the configured hash seed.
    fn hash_string(&self, string: &str) -> u32;
    /// [`murmur_hash_64`] seeded with the configured murmur seed.
    fn murmur_hash_64(&self, key: &[u8]) -> u64;
}

impl SeededHash for Config {
    fn hash_data(&self, data: &[u8]) -> u32 {
        hash_data(data, self.hash_seed)
    }

    fn hash_string(&self, string: &str) -> u32 {
        hash_string(string, self.hash_seed)
    }

    fn murmur_hash_64(&self, key: &[u8]) -> u64 {
        murmur_hash_64(key, self.murmur_seed)
    }
}

#[cfg(test)]
mod tests {
    use wirebits_core::constants::HASH_SEED_DEFAULT;

    use super::*;

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(hash_data(b"", HASH_SEED_DEFAULT), 0x811C_9DC5);
        assert_eq!(hash_data(b"a", HASH_SEED_DEFAULT), 0xE40C_292C);
        assert_eq!(hash_data(b"foobar", HASH_SEED_DEFAULT), 0xBF9C_F968);
    }

    #[test]
    fn test_hash_data_chains() {
        let whole = hash_data(b"connect token", HASH_SEED_DEFAULT);
        let split = hash_data(b" token", hash_data(b"connect", HASH_SEED_DEFAULT));
        assert_eq!(whole, split);
    }

    #[test]
    fn test_hash_string_matches_hash_data() {
        assert_eq!(
            hash_string("foobar", HASH_SEED_DEFAULT),
            hash_data(b"foobar", HASH_SEED_DEFAULT)
        );
    }

    #[test]
    fn test_hash_string_stops_at_nul() {
        assert_eq!(
            hash_string("foo\0bar", HASH_SEED_DEFAULT),
            hash_string("foo", HASH_SEED_DEFAULT)
        );
    }

    #[test]
    fn test_murmur_empty_key_with_zero_seed() {
        assert_eq!(murmur_hash_64(b"", 0), 0);
    }

    #[test]
    fn test_murmur_reference_values() {
        // One full word plus a five-byte tail.
        assert_eq!(murmur_hash_64(b"abcdefghijklm", 0), 0xE126_E825_BAAB_A665);
        assert_eq!(murmur_hash_64(b"abcdefghijklm", 0x9747_B28C), 0xE471_167E_6847_BA6D);
        assert_eq!(
            murmur_hash_64(b"The quick brown fox jumps over the lazy dog", 0),
            0x5589_CA33_042A_861B
        );
        assert_eq!(murmur_hash_64(b"", 1), 0xC6A4_A793_5BD0_64DC);
    }

    #[test]
    fn test_murmur_is_deterministic_and_seeded() {
        let key = b"0123456789abcdef-tail";
        assert_eq!(murmur_hash_64(key, 42), murmur_hash_64(key, 42));
        assert_ne!(murmur_hash_64(key, 42), murmur_hash_64(key, 43));
        assert_ne!(murmur_hash_64(b"", 1), 0);
    }

    #[test]
    fn test_murmur_sensitive_to_every_byte() {
        let key = *b"abcdefghijklm";
        let base = murmur_hash_64(&key, 0);
        for i in 0..key.len() {
            let mut flipped = key;
            flipped[i] ^= 0x01;
            assert_ne!(murmur_hash_64(&flipped, 0), base, "byte {}", i);
        }
    }

    #[test]
    fn test_murmur_length_matters() {
        assert_ne!(murmur_hash_64(&[0u8; 8], 0), murmur_hash_64(&[0u8; 9], 0));
        assert_ne!(murmur_hash_64(&[0u8; 1], 0), murmur_hash_64(&[0u8; 2], 0));
    }

    #[test]
    fn test_seeded_hash_uses_config_seeds() {
        let config = Config { hash_seed: 7, murmur_seed: 99, ..Config::default() };
        assert_eq!(config.hash_data(b"abc"), hash_data(b"abc", 7));
        assert_eq!(config.hash_string("abc"), hash_string("abc", 7));
        assert_eq!(config.murmur_hash_64(b"abc"), murmur_hash_64(b"abc", 99));

        let default = Config::default();
        assert_eq!(default.hash_data(b"a"), 0xE40C_292C);
    }
}
