//! Identity configuration from TOML (`[identity]` section)

use serde::{Deserialize, Serialize};

/// The identity string echoed in every successful response.
///
/// Usually supplied through the `OFFICIAL_EMAIL` environment variable
/// rather than a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIdentityConfig {
    pub official_email: Option<String>,
}

impl FileIdentityConfig {
    /// Whether a non-blank identity is configured.
    pub fn is_configured(&self) -> bool {
        self.official_email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_identity_is_not_configured() {
        let mut config = FileIdentityConfig::default();
        assert!(!config.is_configured());

        config.official_email = Some("   ".to_string());
        assert!(!config.is_configured());

        config.official_email = Some("dev@example.com".to_string());
        assert!(config.is_configured());
    }
}
