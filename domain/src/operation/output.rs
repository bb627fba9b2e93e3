//! Executor results.

use crate::arithmetic::fibonacci::FibonacciTerm;
use serde::Serialize;

/// The `data` payload of a successful compute response.
///
/// Serialized untagged: a sequence, an integer, or a string depending on
/// the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Fibonacci(Vec<FibonacciTerm>),
    Primes(Vec<i64>),
    Lcm(u64),
    Hcf(u64),
    Answer(String),
}
