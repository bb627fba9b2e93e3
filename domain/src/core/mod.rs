//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question for the answer service
//! - [`error::ValidationError`]: input validation failures

pub mod error;
pub mod question;
