//! Domain error types

use thiserror::Error;

/// Input validation failures.
///
/// Every variant is reported to clients as-is (its `Display` text is the
/// public error message), so messages name the offending field and the
/// violated constraint without echoing the rejected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    InvalidBody,

    #[error("Request body must contain exactly one operation key")]
    EmptyBody,

    #[error("Request body must contain exactly one operation key, found {0}")]
    MultipleKeys(usize),

    #[error("Unknown operation '{0}'; expected one of: fibonacci, prime, lcm, hcf, AI")]
    UnknownOperation(String),

    #[error("{field} must be an integer")]
    NotAnInteger { field: String },

    #[error("{field} must be a safe integer")]
    UnsafeInteger { field: String },

    #[error("{field} must be a non-negative integer")]
    Negative { field: String },

    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: i64 },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be an array of integers")]
    NotAnArray { field: String },

    #[error("{field} must not be an empty array")]
    EmptyArray { field: String },

    #[error("{field} must contain at most {max} elements")]
    TooManyElements { field: String, max: usize },

    #[error("{field} must be a string")]
    NotAString { field: String },

    #[error("{field} must not be empty")]
    EmptyQuestion { field: String },

    #[error("{field} must be at most {max} characters")]
    QuestionTooLong { field: String, max: usize },
}

impl ValidationError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidBody => "INVALID_BODY",
            ValidationError::EmptyBody => "EMPTY_BODY",
            ValidationError::MultipleKeys(_) => "MULTIPLE_KEYS",
            ValidationError::UnknownOperation(_) => "UNKNOWN_OPERATION",
            ValidationError::NotAnInteger { .. } => "NOT_AN_INTEGER",
            ValidationError::UnsafeInteger { .. } => "UNSAFE_INTEGER",
            ValidationError::Negative { .. } => "NEGATIVE",
            ValidationError::TooLarge { .. } => "TOO_LARGE",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
            ValidationError::NotAnArray { .. } => "NOT_AN_ARRAY",
            ValidationError::EmptyArray { .. } => "EMPTY_ARRAY",
            ValidationError::TooManyElements { .. } => "TOO_MANY_ELEMENTS",
            ValidationError::NotAString { .. } => "NOT_A_STRING",
            ValidationError::EmptyQuestion { .. } => "EMPTY_QUESTION",
            ValidationError::QuestionTooLong { .. } => "QUESTION_TOO_LONG",
        }
    }
}
