//! Raw TOML configuration data types
//!
//! These structs mirror the config file one-to-one. Every section has
//! defaults, so an empty file (or no file) is a valid configuration.

mod ai;
mod identity;
mod logging;
mod server;

pub use ai::FileAiConfig;
pub use identity::FileIdentityConfig;
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use bfhl_application::ServiceConfig;
use bfhl_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listener and HTTP middleware settings
    pub server: FileServerConfig,
    /// Identity echoed in responses
    pub identity: FileIdentityConfig,
    /// Answer service settings
    pub ai: FileAiConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the service unable to start. A missing identity or
    /// credential is only a warning: the affected requests answer 500.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.ai.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "ai.timeout_seconds must be greater than 0",
            ));
        }

        if self.server.body_limit_bytes == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroBodyLimit,
                "server.body_limit_bytes must be greater than 0",
            ));
        }

        if self.ai.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "ai.model must not be empty",
            ));
        }

        if !self.identity.is_configured() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingIdentity,
                "identity.official_email is not set (OFFICIAL_EMAIL); every request will fail with 500",
            ));
        }

        if self.ai.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredential,
                format!(
                    "no answer service key (ai.api_key or {}); the AI operation will fail with 500",
                    self.ai.api_key_env
                ),
            ));
        }

        issues
    }

    /// Settings consumed by the use cases.
    pub fn to_service_config(&self) -> ServiceConfig {
        let config = ServiceConfig::default().with_answer_timeout(self.ai.timeout());
        match &self.identity.official_email {
            Some(email) => config.with_official_email(email.clone()),
            None => config,
        }
    }
}
