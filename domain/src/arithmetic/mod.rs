//! Arithmetic executors.
//!
//! Pure functions over already-validated inputs. None of them allocate
//! beyond their output or recurse.
//!
//! | Module | Operation |
//! |--------|-----------|
//! | [`fibonacci`] | first n Fibonacci numbers, exact |
//! | [`prime`] | trial-division primality and stable prime filter |
//! | [`divisors`] | Euclidean GCD reduction and checked LCM reduction |

pub mod divisors;
pub mod fibonacci;
pub mod prime;
