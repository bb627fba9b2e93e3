//! Service configuration consumed by the use cases.
//!
//! The values are opaque to the use cases: they only check presence.
//! Loading and layering happen in the infrastructure layer.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default budget for one answer-service call.
pub const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(10);

/// A required setting is missing at request time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("official email is not configured")]
    MissingIdentity,

    #[error("answer service credential is not configured")]
    MissingCredential,
}

/// Configuration shared by the compute and health-check use cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Identity string attached to every successful response.
    pub official_email: Option<String>,
    /// Budget for one answer-service call.
    pub answer_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            official_email: None,
            answer_timeout: DEFAULT_ANSWER_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    // ==================== Builder Methods ====================

    pub fn with_official_email(mut self, email: impl Into<String>) -> Self {
        self.official_email = Some(email.into());
        self
    }

    pub fn with_answer_timeout(mut self, timeout: Duration) -> Self {
        self.answer_timeout = timeout;
        self
    }

    // ==================== Accessors ====================

    /// The configured identity; blank values count as missing.
    pub fn identity(&self) -> Result<&str, ConfigurationError> {
        self.official_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or(ConfigurationError::MissingIdentity)
    }
}
