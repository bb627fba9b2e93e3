//! GCD (HCF) and LCM reductions.
//!
//! Both reduce left to right over the absolute values of their inputs, so
//! results are always non-negative and invariant under sign flips.

use crate::operation::bounded::MAX_SAFE_INTEGER;
use thiserror::Error;

/// An LCM reduction step left the safe-integer range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("LCM result exceeds the safe integer range")]
pub struct LcmOverflow;

/// Euclidean GCD: `gcd(a, b) = gcd(b, a mod b)`, `gcd(a, 0) = a`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Highest common factor of all values.
///
/// `hcf(&[0, 0]) == 0`; an empty slice also yields 0.
pub fn hcf(values: &[i64]) -> u64 {
    values.iter().map(|v| v.unsigned_abs()).fold(0, gcd)
}

/// Least common multiple of all values.
///
/// Any zero element makes the result 0. Otherwise each pairwise step
/// computes `|a * b| / gcd(a, b)` and fails with [`LcmOverflow`] as soon as
/// an intermediate exceeds [`MAX_SAFE_INTEGER`]. An empty slice yields 1.
pub fn lcm(values: &[i64]) -> Result<u64, LcmOverflow> {
    if values.contains(&0) {
        return Ok(0);
    }
    values
        .iter()
        .map(|v| v.unsigned_abs())
        .try_fold(1, checked_lcm)
}

/// One checked reduction step.
fn checked_lcm(a: u64, b: u64) -> Result<u64, LcmOverflow> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let product = u128::from(a) * u128::from(b);
    let result = product / u128::from(gcd(a, b));
    u64::try_from(result)
        .ok()
        .filter(|&v| v <= MAX_SAFE_INTEGER as u64)
        .ok_or(LcmOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== gcd / hcf ====================

    #[test]
    fn test_gcd_basics() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 13), 1);
    }

    #[test]
    fn test_hcf_scenarios() {
        assert_eq!(hcf(&[24, 36, 60]), 12);
        assert_eq!(hcf(&[0, 5]), 5);
        assert_eq!(hcf(&[0, 0]), 0);
        assert_eq!(hcf(&[42]), 42);
        assert_eq!(hcf(&[-42]), 42);
    }

    #[test]
    fn test_hcf_sign_invariance() {
        let base = [24, 36, 60];
        for mask in 0..8 {
            let flipped: Vec<i64> = base
                .iter()
                .enumerate()
                .map(|(i, &v)| if mask & (1 << i) != 0 { -v } else { v })
                .collect();
            assert_eq!(hcf(&flipped), 12, "signs {flipped:?}");
        }
    }

    // ==================== lcm ====================

    #[test]
    fn test_lcm_scenarios() {
        assert_eq!(lcm(&[12, 18, 24]), Ok(72));
        assert_eq!(lcm(&[4, 6]), Ok(12));
        assert_eq!(lcm(&[7]), Ok(7));
        assert_eq!(lcm(&[-7]), Ok(7));
        assert_eq!(lcm(&[-4, 6]), Ok(12));
    }

    #[test]
    fn test_lcm_zero_short_circuits() {
        assert_eq!(lcm(&[0]), Ok(0));
        assert_eq!(lcm(&[5, 0, 3]), Ok(0));
        // Zero wins even when the non-zero part would overflow
        let mut values: Vec<i64> = (999_900..1_000_000).collect();
        values.push(0);
        assert_eq!(lcm(&values), Ok(0));
    }

    #[test]
    fn test_lcm_is_order_independent() {
        let values = [12, 18, 24, 35, 9];
        let expected = lcm(&values).unwrap();
        let mut reversed = values;
        reversed.reverse();
        assert_eq!(lcm(&reversed), Ok(expected));
        assert_eq!(lcm(&[lcm(&[12, 18]).unwrap() as i64, 24, 35, 9]), Ok(expected));
    }

    #[test]
    fn test_lcm_overflow() {
        // Product of distinct large primes blows past 2^53 quickly
        assert_eq!(lcm(&[999_983, 999_979, 999_961]), Err(LcmOverflow));
    }

    #[test]
    fn test_lcm_at_safe_boundary() {
        assert_eq!(checked_lcm(MAX_SAFE_INTEGER as u64, 1), Ok(MAX_SAFE_INTEGER as u64));
        assert_eq!(checked_lcm(MAX_SAFE_INTEGER as u64, 2), Err(LcmOverflow));
    }
}
