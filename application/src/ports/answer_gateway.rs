//! Answer Gateway port
//!
//! Defines the interface for reaching the external natural-language
//! answer service used by the `AI` operation.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failures of an answer-service call.
///
/// This is a closed set: adapters must classify every transport or
/// protocol failure into one of these variants. The payload strings are
/// diagnostic detail for logs and are never shown to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The service answered with an error response.
    #[error("Answer service rejected the request: {0}")]
    Upstream(String),

    /// The call exceeded its time budget.
    #[error("Answer service timed out")]
    Timeout,

    /// The service could not be reached (DNS, connect, reset).
    #[error("Answer service unreachable: {0}")]
    Unreachable(String),
}

/// Gateway to the external answer service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnswerGateway: Send + Sync {
    /// Send a prompt and return the raw reply text.
    ///
    /// `timeout` is the budget for the whole call; implementations should
    /// abort and return [`AnswerError::Timeout`] once it is spent.
    async fn ask(&self, prompt: &str, timeout: Duration) -> Result<String, AnswerError>;
}
