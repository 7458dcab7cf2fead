//! Bit widths for serializing bounded integers.
//!
//! Two runtime paths compute the same answer: one built on
//! [`u32::leading_zeros`] and a portable one that smears the highest set bit
//! downwards and counts the result. The `portable-bits` feature makes
//! [`bits_required`] use the latter.

use wirebits_core::error::{ErrorKind, Result};

/// Counts the bits set to 1 in `x`.
///
/// Branch-free reduction from "Hacker's Delight", usable in const context.
pub const fn popcount(x: u32) -> u32 {
    let a = x - ((x >> 1) & 0x5555_5555);
    let b = ((a >> 2) & 0x3333_3333) + (a & 0x3333_3333);
    let c = ((b >> 4) + b) & 0x0f0f_0f0f;
    let d = c + (c >> 8);
    let e = d + (d >> 16);
    e & 0x0000_003f
}

/// Floor of the base 2 logarithm of `x`, with `log2(0) == 0`.
pub const fn log2(x: u32) -> u32 {
    let a = x | (x >> 1);
    let b = a | (a >> 2);
    let c = b | (b >> 4);
    let d = c | (c >> 8);
    let e = d | (d >> 16);
    popcount(e >> 1)
}

/// Number of bits needed to serialize any integer in `[min, max]`.
///
/// Returns 0 when `min == max` since a single value carries no information.
///
/// # Errors
/// [`ErrorKind::InvalidRange`] when `min > max`.
///
/// # Examples
/// ```
/// use wirebits_protocol::bits::bits_required;
///
/// assert_eq!(bits_required(0, 1).unwrap(), 1);
/// assert_eq!(bits_required(0, 255).unwrap(), 8);
/// assert_eq!(bits_required(100, 356).unwrap(), 9);
/// assert!(bits_required(2, 1).is_err());
/// ```
pub fn bits_required(min: u32, max: u32) -> Result<u32> {
    if cfg!(feature = "portable-bits") {
        bits_required_portable(min, max)
    } else {
        bits_required_intrinsic(min, max)
    }
}

/// [`bits_required`] computed with `leading_zeros`.
pub fn bits_required_intrinsic(min: u32, max: u32) -> Result<u32> {
    let range = checked_range(min, max)?;
    Ok(u32::BITS - range.leading_zeros())
}

/// [`bits_required`] computed with the bit-smearing fallback.
pub fn bits_required_portable(min: u32, max: u32) -> Result<u32> {
    let range = checked_range(min, max)?;
    Ok(if range == 0 { 0 } else { log2(range) + 1 })
}

fn checked_range(min: u32, max: u32) -> Result<u32> {
    if min > max {
        return Err(ErrorKind::InvalidRange {
            min: i64::from(min),
            max: i64::from(max),
        });
    }
    Ok(max - min)
}

/// Compile-time bit width of the signed range `[min, max]`.
///
/// Evaluating this in a const context with `min > max` fails the build.
///
/// ```
/// use wirebits_protocol::bits::bits_required_const;
///
/// const CHANNEL_BITS: u32 = bits_required_const(0, 63);
/// assert_eq!(CHANNEL_BITS, 6);
/// ```
pub const fn bits_required_const(min: i64, max: i64) -> u32 {
    assert!(min <= max, "bits_required_const: min must not exceed max");
    // The true difference always fits in u64, so the wrapped bits are exact.
    let range = max.wrapping_sub(min) as u64;
    u64::BITS - range.leading_zeros()
}

/// Bit width of `[MIN, MAX]` as an associated constant.
///
/// ```
/// use wirebits_protocol::bits::BitsRequired;
///
/// assert_eq!(BitsRequired::<-1, 1>::RESULT, 2);
/// assert_eq!(BitsRequired::<0, 0>::RESULT, 0);
/// ```
pub struct BitsRequired<const MIN: i64, const MAX: i64>;

impl<const MIN: i64, const MAX: i64> BitsRequired<MIN, MAX> {
    /// Number of bits required to hold any value in `[MIN, MAX]`.
    pub const RESULT: u32 = bits_required_const(MIN, MAX);
}
