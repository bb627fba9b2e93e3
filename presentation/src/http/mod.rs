//! HTTP surface: router, handlers, envelope and error mapping

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod router;

pub use envelope::Envelope;
pub use error::ApiError;
pub use router::{AppState, build_router};
