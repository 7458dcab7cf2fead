//! Pseudo random helpers for network simulation and tests.
//!
//! These are not cryptographically secure. The generator is always passed
//! in, so simulations stay reproducible and nothing here holds global state.

use rand::Rng;

/// Returns a random integer in `[a, b]`.
///
/// # Panics
/// If `a > b`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, a: i32, b: i32) -> i32 {
    assert!(a <= b, "random_int: empty range [{}, {}]", a, b);
    rng.gen_range(a..=b)
}

/// Returns a random float in `[a, b]`.
///
/// # Panics
/// If `a > b`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    assert!(a <= b, "random_float: empty range [{}, {}]", a, b);
    rng.gen_range(a..=b)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_random_int_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = random_int(&mut rng, -5, 5);
            assert!((-5..=5).contains(&value));
        }
        assert_eq!(random_int(&mut rng, 3, 3), 3);
    }

    #[test]
    fn test_random_int_covers_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[random_int(&mut rng, 0, 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_float_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let value = random_float(&mut rng, 0.25, 0.75);
            assert!((0.25..=0.75).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..16 {
            assert_eq!(random_int(&mut a, 0, 1_000_000), random_int(&mut b, 0, 1_000_000));
        }
    }

    #[test]
    #[should_panic]
    fn test_random_int_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        random_int(&mut rng, 2, 1);
    }
}
