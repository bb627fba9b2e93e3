//! Configuration loading for bfhl-service
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `BFHL_*` environment variables
//! 2. `OFFICIAL_EMAIL` and `PORT` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./bfhl.toml` or `./.bfhl.toml`
//! 5. Global: `$XDG_CONFIG_HOME/bfhl/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAiConfig, FileConfig, FileIdentityConfig, FileLoggingConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
