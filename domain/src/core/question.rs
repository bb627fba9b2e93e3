//! Question value object

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A question to be answered by the external answer service (Value Object)
///
/// Guaranteed non-blank and at most [`Question::MAX_LEN`] long.
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (most emoji) counts twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Maximum question length in UTF-16 code units
    pub const MAX_LEN: usize = 1000;

    /// Try to create a new question.
    ///
    /// `field` names the request key in error messages.
    pub fn try_new(content: impl Into<String>, field: &str) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion {
                field: field.to_string(),
            });
        }
        if content.encode_utf16().count() > Self::MAX_LEN {
            return Err(ValidationError::QuestionTooLong {
                field: field.to_string(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in UTF-16 code units
    pub fn utf16_len(&self) -> usize {
        self.content.encode_utf16().count()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
