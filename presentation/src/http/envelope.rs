//! Uniform response envelope
//!
//! Every endpoint answers with the same shape. `is_success` is the only
//! field a client needs to branch on: successes carry `official_email`
//! (and `data` for computations), failures carry only `error`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful computation.
    pub fn success(official_email: impl Into<String>, data: T) -> Self {
        Self {
            is_success: true,
            official_email: Some(official_email.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    /// Success without a payload (health check).
    pub fn identity(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: Some(official_email.into()),
            data: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: None,
            data: None,
            error: Some(error.into()),
        }
    }
}
