//! Answer service configuration from TOML (`[ai]` section)

use crate::gemini::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini answer service settings.
///
/// # Example
///
/// ```toml
/// [ai]
/// api_key_env = "GEMINI_API_KEY"
/// model = "gemini-2.5-flash"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAiConfig {
    /// Environment variable holding the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; takes precedence over `api_key_env` when set.
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Model used for `generateContent`.
    pub model: String,
    /// Budget for one answer call, in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileAiConfig {
    /// The API key from `api_key`, else from the `api_key_env` variable.
    ///
    /// Blank values are treated as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Adapter settings, or `None` when no credential is available.
    pub fn to_gemini_config(&self) -> Option<GeminiConfig> {
        let api_key = self.resolve_api_key()?;
        Some(GeminiConfig {
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            model: self.model.trim().to_string(),
        })
    }
}
