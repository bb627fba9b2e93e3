//! Application layer for bfhl-service
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigurationError, ServiceConfig};
pub use ports::answer_gateway::{AnswerError, AnswerGateway};
pub use use_cases::compute::{ComputeError, ComputeOutput, ComputeUseCase};
pub use use_cases::health_check::HealthCheckUseCase;
