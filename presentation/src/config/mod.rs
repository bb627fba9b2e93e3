//! Presentation-level configuration
//!
//! Settings for the HTTP middleware stack.

use serde::{Deserialize, Serialize};

/// Default request body limit (100 KiB).
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// HTTP layer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Largest accepted request body, in bytes
    pub body_limit_bytes: usize,
    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            body_limit_bytes: DEFAULT_BODY_LIMIT,
            cors: true,
        }
    }
}

impl HttpConfig {
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit_bytes = bytes;
        self
    }

    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }
}
