//! Infrastructure layer for bfhl-service
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, and configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAiConfig, FileConfig, FileIdentityConfig, FileLoggingConfig,
    FileServerConfig,
};
pub use gemini::{GeminiAnswerGateway, GeminiConfig, GeminiError};
