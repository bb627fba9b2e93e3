//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod compute;
pub mod health_check;
