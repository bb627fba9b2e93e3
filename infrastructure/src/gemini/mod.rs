//! Gemini adapter for the answer service port
//!
//! Sends the single-word prompt to `generateContent` and returns the raw
//! reply text. Reducing the reply to one word happens in the use case.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::{GeminiAnswerGateway, GeminiConfig};
