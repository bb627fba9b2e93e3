//! Domain layer for bfhl-service
//!
//! This crate contains the core computation logic: the operation tagged
//! union, input validation with explicit bounds, and the arithmetic
//! executors. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Operations
//!
//! A request names exactly one [`OperationKind`]. Its payload is validated
//! into an [`OperationRequest`] whose variants carry already-bounded values:
//!
//! | Key | Payload | Result |
//! |-----|---------|--------|
//! | `fibonacci` | integer `0..=1000` | first n Fibonacci numbers |
//! | `prime` | array of integers (may be empty) | primes, in order |
//! | `lcm` | non-empty array of integers | least common multiple |
//! | `hcf` | non-empty array of integers | greatest common divisor |
//! | `AI` | question string | single-word answer |
//!
//! ## Bounded values
//!
//! Every integer must be a *safe integer* (`|x| <= 2^53 - 1`), and array
//! elements are further limited to `|x| <= 1_000_000`.

pub mod answer;
pub mod arithmetic;
pub mod config;
pub mod core;
pub mod operation;

// Re-export commonly used types
pub use answer::{FALLBACK_ANSWER, extract_single_word, single_word_prompt};
pub use arithmetic::{
    divisors::{LcmOverflow, gcd, hcf, lcm},
    fibonacci::{FibonacciTerm, fibonacci},
    prime::{filter_primes, is_prime},
};
pub use config::{ConfigIssue, ConfigIssueCode, LogFormat, Severity};
pub use core::{error::ValidationError, question::Question};
pub use operation::{
    bounded::{
        BoundedArray, FibonacciCount, MAX_ARRAY_LEN, MAX_ELEMENT_MAGNITUDE, MAX_FIBONACCI_COUNT,
        MAX_SAFE_INTEGER,
    },
    kind::OperationKind,
    output::OperationOutput,
    request::OperationRequest,
};
