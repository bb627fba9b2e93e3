//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Listener and HTTP middleware settings.
///
/// # Example
///
/// ```toml
/// [server]
/// host = "127.0.0.1"
/// port = 8080
/// body_limit_bytes = 65536
/// cors = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Largest accepted request body; bigger bodies get 413.
    pub body_limit_bytes: usize,
    /// Attach a permissive CORS layer.
    pub cors: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_bytes: 100 * 1024,
            cors: true,
        }
    }
}

impl FileServerConfig {
    /// `host:port` as accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
