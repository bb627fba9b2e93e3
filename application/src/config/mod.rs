//! Application-level configuration.
//!
//! - [`ServiceConfig`]: identity and answer-service budget used by the use cases

pub mod service_config;

pub use service_config::{ConfigurationError, ServiceConfig};
