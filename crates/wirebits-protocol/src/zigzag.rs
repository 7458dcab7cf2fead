//! Zig-zag mapping between signed and unsigned integers.
//!
//! `0, -1, 1, -2, 2, ...` maps to `0, 1, 2, 3, 4, ...`, so small deltas stay
//! small whatever their sign and need few bits once serialized.

/// Maps a signed integer to its zig-zag unsigned form.
#[inline]
pub fn signed_to_unsigned(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// Maps a zig-zag unsigned integer back to its signed form.
#[inline]
pub fn unsigned_to_signed(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}
