//! Health check use case.
//!
//! Reports the configured identity, or fails when it is missing.

use crate::config::{ConfigurationError, ServiceConfig};
use std::sync::Arc;

/// Use case backing `GET /health`.
#[derive(Clone)]
pub struct HealthCheckUseCase {
    config: Arc<ServiceConfig>,
}

impl HealthCheckUseCase {
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self { config }
    }

    /// Return the identity string if the process is configured.
    pub fn execute(&self) -> Result<String, ConfigurationError> {
        self.config.identity().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_identity() {
        let config = ServiceConfig::default().with_official_email("dev@example.com");
        let use_case = HealthCheckUseCase::new(Arc::new(config));
        assert_eq!(use_case.execute(), Ok("dev@example.com".to_string()));
    }

    #[test]
    fn test_fails_without_identity() {
        let use_case = HealthCheckUseCase::new(Arc::new(ServiceConfig::default()));
        assert_eq!(use_case.execute(), Err(ConfigurationError::MissingIdentity));
    }
}
