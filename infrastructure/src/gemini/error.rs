//! Error types for the Gemini adapter

use thiserror::Error;

/// Errors raised while setting the adapter up.
///
/// Per-call failures are reported as
/// [`AnswerError`](bfhl_application::AnswerError) instead.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
