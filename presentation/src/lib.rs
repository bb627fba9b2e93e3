//! Presentation layer for bfhl-service
//!
//! This crate contains the CLI definition and the HTTP surface: router,
//! handlers, the response envelope and the mapping from use case errors
//! to status codes.

pub mod cli;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::HttpConfig;
pub use http::{ApiError, AppState, Envelope, build_router};
