//! Configuration issues detected at startup.
//!
//! Validation never aborts on its own: it returns every issue with a
//! severity, and the binary decides what to do with them.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the service cannot start with this configuration.
    Error,
    /// Non-fatal: the service starts, but some requests will fail.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `ai.timeout_seconds` is zero.
    ZeroTimeout,
    /// `server.body_limit_bytes` is zero.
    ZeroBodyLimit,
    /// `ai.model` is empty.
    EmptyModelName,
    /// No identity string: every endpoint will answer 500.
    MissingIdentity,
    /// No answer-service credential: the AI operation will answer 500.
    MissingCredential,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}
