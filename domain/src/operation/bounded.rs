//! Bounded integer and array validators.
//!
//! Payloads arrive as untyped JSON. These validators turn them into typed
//! values whose bounds are guaranteed, reporting the first violated
//! constraint. Checks run in a fixed order so that the reported error is
//! deterministic:
//!
//! 1. type (number / array / string)
//! 2. whole number, then safe-integer range
//! 3. operation-specific range or length
//!
//! A JSON number with a zero fractional part (`7.0`, `1e3`) is accepted as
//! a whole number.

use crate::core::error::ValidationError;
use serde_json::{Number, Value};

/// Largest integer representable exactly in an IEEE-754 double (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Largest Fibonacci count accepted.
pub const MAX_FIBONACCI_COUNT: i64 = 1000;

/// Largest element magnitude accepted in array payloads.
pub const MAX_ELEMENT_MAGNITUDE: i64 = 1_000_000;

/// Longest array payload accepted.
pub const MAX_ARRAY_LEN: usize = 1000;

/// A validated Fibonacci count (`0..=1000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciCount(usize);

impl FibonacciCount {
    /// Validate a raw payload.
    pub fn parse(value: &Value, field: &str) -> Result<Self, ValidationError> {
        let n = safe_integer(value, field)?;
        if n < 0 {
            return Err(ValidationError::Negative {
                field: field.to_string(),
            });
        }
        if n > MAX_FIBONACCI_COUNT {
            return Err(ValidationError::TooLarge {
                field: field.to_string(),
                max: MAX_FIBONACCI_COUNT,
            });
        }
        // 0..=1000 always fits
        Ok(Self(n as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// A validated array of bounded integers.
///
/// Holds at most [`MAX_ARRAY_LEN`] elements, each within
/// `±`[`MAX_ELEMENT_MAGNITUDE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray(Vec<i64>);

impl BoundedArray {
    /// Validate a raw payload, requiring at least `min_len` elements.
    ///
    /// Element errors name the first offending index, e.g. `lcm[3]`.
    pub fn parse(value: &Value, field: &str, min_len: usize) -> Result<Self, ValidationError> {
        let Value::Array(items) = value else {
            return Err(ValidationError::NotAnArray {
                field: field.to_string(),
            });
        };

        if items.len() < min_len {
            return Err(ValidationError::EmptyArray {
                field: field.to_string(),
            });
        }
        if items.len() > MAX_ARRAY_LEN {
            return Err(ValidationError::TooManyElements {
                field: field.to_string(),
                max: MAX_ARRAY_LEN,
            });
        }

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let element_field = format!("{}[{}]", field, index);
            let n = safe_integer(item, &element_field)?;
            if n.abs() > MAX_ELEMENT_MAGNITUDE {
                return Err(ValidationError::OutOfRange {
                    field: element_field,
                    min: -MAX_ELEMENT_MAGNITUDE,
                    max: MAX_ELEMENT_MAGNITUDE,
                });
            }
            values.push(n);
        }

        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extract a whole number within the safe-integer range.
fn safe_integer(value: &Value, field: &str) -> Result<i64, ValidationError> {
    let Value::Number(number) = value else {
        return Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        });
    };

    match whole_number(number) {
        Some(WholeNumber::Exact(n)) if n.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => Ok(n),
        Some(_) => Err(ValidationError::UnsafeInteger {
            field: field.to_string(),
        }),
        None => Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        }),
    }
}

enum WholeNumber {
    Exact(i64),
    Unrepresentable,
}

/// Classify a JSON number: `None` if it has a fractional part.
///
/// Literals whose magnitude overflows a double (`1e400`) are whole and
/// beyond the safe range.
fn whole_number(number: &Number) -> Option<WholeNumber> {
    if let Some(n) = number.as_i64() {
        return Some(WholeNumber::Exact(n));
    }
    if number.as_u64().is_some() {
        return Some(WholeNumber::Unrepresentable);
    }

    let f = match number.as_f64() {
        Some(f) => f,
        None => number.to_string().parse::<f64>().ok()?,
    };
    if f.is_infinite() {
        return Some(WholeNumber::Unrepresentable);
    }
    if f.is_nan() || f.fract() != 0.0 {
        return None;
    }
    if f.abs() <= MAX_SAFE_INTEGER as f64 {
        // Exact: a whole double within the safe range converts losslessly
        Some(WholeNumber::Exact(f as i64))
    } else {
        Some(WholeNumber::Unrepresentable)
    }
}
