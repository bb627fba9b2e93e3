//! HTTP error mapping
//!
//! [`ApiError`] is the single place where failure categories become status
//! codes and public messages. Upstream details are logged, never returned.

use super::envelope::Envelope;
use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bfhl_application::{AnswerError, ComputeError, ConfigurationError};
use bfhl_domain::{LcmOverflow, ValidationError};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected input; the message is returned as-is.
    #[error(transparent)]
    Validation(ValidationError),

    #[error(transparent)]
    Overflow(LcmOverflow),

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Route not found")]
    NotFound,

    #[error("{}", configuration_message(.0))]
    Configuration(ConfigurationError),

    #[error("AI service returned an error")]
    UpstreamRejected(String),

    #[error("AI service is unreachable")]
    UpstreamUnreachable(String),

    #[error("AI service request timed out")]
    UpstreamTimeout,

    #[error("Internal server error")]
    Internal(String),
}

fn configuration_message(error: &ConfigurationError) -> &'static str {
    match error {
        ConfigurationError::MissingIdentity => "Server configuration error",
        ConfigurationError::MissingCredential => "AI service is not configured",
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Overflow(_) | ApiError::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::UpstreamRejected(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error)
    }
}

impl From<ConfigurationError> for ApiError {
    fn from(error: ConfigurationError) -> Self {
        ApiError::Configuration(error)
    }
}

impl From<AnswerError> for ApiError {
    fn from(error: AnswerError) -> Self {
        match error {
            AnswerError::Upstream(detail) => ApiError::UpstreamRejected(detail),
            AnswerError::Unreachable(detail) => ApiError::UpstreamUnreachable(detail),
            AnswerError::Timeout => ApiError::UpstreamTimeout,
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(error: ComputeError) -> Self {
        match error {
            ComputeError::Validation(e) => e.into(),
            ComputeError::Overflow(e) => ApiError::Overflow(e),
            ComputeError::Configuration(e) => e.into(),
            ComputeError::Answer(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                ApiError::InvalidJson
            }
            JsonRejection::MissingJsonContentType(_) => ValidationError::InvalidBody.into(),
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
            other => ApiError::Internal(other.body_text()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Internal(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(e) => debug!(%status, code = e.code(), "Request rejected"),
            ApiError::Overflow(_) => debug!(%status, code = "LCM_OVERFLOW", "Request rejected"),
            ApiError::UpstreamRejected(detail) | ApiError::UpstreamUnreachable(detail) => {
                warn!(%status, %detail, "Answer service failure");
            }
            ApiError::UpstreamTimeout => warn!(%status, "Answer service timed out"),
            ApiError::Configuration(e) => warn!(%status, error = %e, "Configuration missing"),
            ApiError::Internal(detail) => error!(%status, %detail, "Internal error"),
            _ => {}
        }
        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Validation(ValidationError::EmptyBody), StatusCode::BAD_REQUEST),
            (ApiError::Overflow(LcmOverflow), StatusCode::BAD_REQUEST),
            (ApiError::InvalidJson, StatusCode::BAD_REQUEST),
            (ApiError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (
                ApiError::Configuration(ConfigurationError::MissingIdentity),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::UpstreamRejected("x".into()), StatusCode::BAD_GATEWAY),
            (
                ApiError::UpstreamUnreachable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ApiError::UpstreamTimeout, StatusCode::GATEWAY_TIMEOUT),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.status(), status, "{error:?}");
        }
    }

    #[test]
    fn test_upstream_detail_not_exposed() {
        let error = ApiError::from(AnswerError::Upstream("HTTP 401: API key sk-123 invalid".into()));
        assert_eq!(error.to_string(), "AI service returned an error");

        let error = ApiError::Internal("stack trace".into());
        assert_eq!(error.to_string(), "Internal server error");
    }

    #[test]
    fn test_configuration_messages() {
        assert_eq!(
            ApiError::from(ConfigurationError::MissingIdentity).to_string(),
            "Server configuration error"
        );
        assert_eq!(
            ApiError::from(ConfigurationError::MissingCredential).to_string(),
            "AI service is not configured"
        );
    }

    #[test]
    fn test_validation_keeps_its_code() {
        match ApiError::from(ComputeError::Validation(ValidationError::MultipleKeys(2))) {
            ApiError::Validation(e) => assert_eq!(e.code(), "MULTIPLE_KEYS"),
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_compute_errors() {
        let error = ApiError::from(ComputeError::Validation(ValidationError::EmptyBody));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.to_string(),
            "Request body must contain exactly one operation key"
        );

        let error = ApiError::from(ComputeError::Overflow(LcmOverflow));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        let error = ApiError::from(ComputeError::Answer(AnswerError::Timeout));
        assert_eq!(error.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
