//! Logging configuration from TOML (`[logging]` section)

use bfhl_domain::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output settings. CLI flags override both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Line format on stderr and in the log file.
    pub format: LogFormat,
    /// Directory for daily-rolling log files; stderr only when unset.
    pub directory: Option<PathBuf>,
}
