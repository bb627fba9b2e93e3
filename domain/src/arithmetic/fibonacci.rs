//! Fibonacci sequence generation.

use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// One exact Fibonacci term.
///
/// Terms past F(78) exceed the safe-integer range and F(999) has 209
/// digits, so terms are arbitrary precision and serialize as plain JSON
/// integer literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciTerm(BigUint);

impl FibonacciTerm {
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl From<u64> for FibonacciTerm {
    fn from(n: u64) -> Self {
        Self(BigUint::from(n))
    }
}

impl std::fmt::Display for FibonacciTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FibonacciTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number =
            serde_json::Number::from_str(&self.0.to_string()).map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

/// Generate the first `count` Fibonacci numbers: `0, 1, 1, 2, 3, ...`
///
/// Iterative with two running accumulators; `count == 0` yields an empty
/// sequence.
pub fn fibonacci(count: usize) -> Vec<FibonacciTerm> {
    let mut sequence = Vec::with_capacity(count);
    let mut current = BigUint::from(0u8);
    let mut next = BigUint::from(1u8);

    for _ in 0..count {
        let following = &current + &next;
        let term = std::mem::replace(&mut current, next);
        next = following;
        sequence.push(FibonacciTerm(term));
    }

    sequence
}
