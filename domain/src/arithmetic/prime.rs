//! Primality testing and prime filtering.

/// Trial-division primality test.
///
/// Integers below 2 (including zero and all negatives) are not prime. Odd
/// candidates are divided by odd numbers up to their integer square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = n.isqrt();
    (3..=limit).step_by(2).all(|divisor| n % divisor != 0)
}

/// Keep the prime elements, preserving order and duplicates.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&n| is_prime(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        let primes: Vec<i64> = (-10..=30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_squares_of_primes_are_composite() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(997 * 997));
    }

    #[test]
    fn test_bound_values() {
        assert!(is_prime(999_983)); // largest prime below 1_000_000
        assert!(!is_prime(1_000_000));
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_filter_keeps_order_and_duplicates() {
        assert_eq!(filter_primes(&[2, 4, 7, 9, 11]), vec![2, 7, 11]);
        assert_eq!(filter_primes(&[7, 2, 7, -7, 1, 2]), vec![7, 2, 7, 2]);
        assert!(filter_primes(&[]).is_empty());
        assert!(filter_primes(&[0, 1, 4, 6, 8, 9, 10]).is_empty());
    }

    #[test]
    fn test_filter_matches_predicate() {
        let values: Vec<i64> = (-50..200).collect();
        let filtered = filter_primes(&values);
        assert!(filtered.iter().all(|&n| is_prime(n)));
        assert_eq!(
            filtered.len(),
            values.iter().filter(|&&n| is_prime(n)).count()
        );
    }
}
