//! Wrap-aware ordering of 16-bit sequence numbers.
//!
//! Sequence numbers that are close together compare as usual. When they are
//! more than half the space apart the smaller one is assumed to have wrapped,
//! so `sequence_greater_than(0, 65535)` holds.

use std::cmp::Ordering;

use wirebits_core::constants::SEQUENCE_HALF_RANGE;

/// 16-bit sequence number type used by the protocol.
pub type SequenceNumber = u16;

/// Returns true when `s1` comes after `s2`, with wrapping considered.
///
/// Values exactly half the space apart are not treated as wrapped, so the
/// numerically larger one wins: `sequence_greater_than(32768, 0)` is true and
/// `sequence_greater_than(0, 32768)` is false.
#[inline]
pub fn sequence_greater_than(s1: SequenceNumber, s2: SequenceNumber) -> bool {
    ((s1 > s2) && (s1 - s2 <= SEQUENCE_HALF_RANGE))
        || ((s1 < s2) && (s2 - s1 > SEQUENCE_HALF_RANGE))
}

/// Returns true when `s1` comes before `s2`, with wrapping considered.
#[inline]
pub fn sequence_less_than(s1: SequenceNumber, s2: SequenceNumber) -> bool {
    sequence_greater_than(s2, s1)
}

/// Three-way wrap-aware comparison of two sequence numbers.
pub fn sequence_cmp(s1: SequenceNumber, s2: SequenceNumber) -> Ordering {
    if s1 == s2 {
        Ordering::Equal
    } else if sequence_greater_than(s1, s2) {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Signed distance from `s2` to `s1` around the sequence space.
///
/// Positive exactly when `sequence_greater_than(s1, s2)`. At the half-way
/// point the sign follows the same tie-break as the comparison.
pub fn sequence_difference(s1: SequenceNumber, s2: SequenceNumber) -> i32 {
    let half = i32::from(SEQUENCE_HALF_RANGE);
    let forward = i32::from(s1.wrapping_sub(s2));
    if forward > half || (forward == half && s1 < s2) {
        forward - 65536
    } else {
        forward
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_linear_order_near_each_other() {
        assert!(sequence_greater_than(1, 0));
        assert!(!sequence_greater_than(0, 1));
        assert!(sequence_less_than(0, 1));
        assert!(sequence_greater_than(1000, 999));
        assert!(!sequence_greater_than(5, 5));
        assert!(!sequence_less_than(5, 5));
    }

    #[test]
    fn test_wrap_boundary() {
        assert!(sequence_greater_than(0, 65535));
        assert!(sequence_less_than(65535, 0));
        assert!(sequence_greater_than(10, 65500));
        assert!(sequence_less_than(65000, 3));
    }

    #[test]
    fn test_half_range_tie_is_not_a_wrap() {
        for s in [0u16, 1, 100, 20000, 32767] {
            let half = s.wrapping_add(32768);
            assert!(!sequence_greater_than(s, half), "s = {}", s);
            assert!(sequence_greater_than(half, s), "s = {}", s);
        }
        assert!(sequence_greater_than(32768, 0));
        assert!(!sequence_greater_than(0, 32768));
        assert!(sequence_greater_than(0, 32769));
    }

    #[test]
    fn test_sequence_cmp() {
        assert_eq!(sequence_cmp(7, 7), Ordering::Equal);
        assert_eq!(sequence_cmp(0, 65535), Ordering::Greater);
        assert_eq!(sequence_cmp(65535, 0), Ordering::Less);
        assert_eq!(sequence_cmp(0, 32768), Ordering::Less);
    }

    #[test]
    fn test_sequence_difference() {
        assert_eq!(sequence_difference(5, 5), 0);
        assert_eq!(sequence_difference(1, 0), 1);
        assert_eq!(sequence_difference(0, 65535), 1);
        assert_eq!(sequence_difference(65535, 0), -1);
        assert_eq!(sequence_difference(32768, 0), 32768);
        assert_eq!(sequence_difference(0, 32768), -32768);
        assert_eq!(sequence_difference(0, 32769), 32767);
        assert_eq!(sequence_difference(32769, 0), -32767);
    }

    proptest! {
        #[test]
        fn prop_exactly_one_direction(a in any::<u16>(), b in any::<u16>()) {
            prop_assume!(a != b);
            prop_assert!(sequence_greater_than(a, b) ^ sequence_greater_than(b, a));
            prop_assert_eq!(sequence_less_than(a, b), sequence_greater_than(b, a));
        }

        #[test]
        fn prop_successor_is_greater(s in any::<u16>()) {
            prop_assert!(sequence_greater_than(s.wrapping_add(1), s));
            prop_assert!(sequence_less_than(s, s.wrapping_add(1)));
        }

        #[test]
        fn prop_difference_sign_matches_order(a in any::<u16>(), b in any::<u16>()) {
            let diff = sequence_difference(a, b);
            prop_assert_eq!(diff > 0, sequence_greater_than(a, b));
            prop_assert_eq!(a.wrapping_sub(b), diff as u16);
        }
    }
}
