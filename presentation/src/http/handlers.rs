//! Request handlers

use super::envelope::Envelope;
use super::error::ApiError;
use super::router::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use bfhl_domain::{OperationOutput, ValidationError};
use serde_json::Value;
use tracing::debug;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Json<Envelope<()>>, ApiError> {
    let official_email = state.health.execute()?;
    Ok(Json(Envelope::identity(official_email)))
}

/// `POST /bfhl`
///
/// The body is taken as raw JSON; shape checks belong to the use case so
/// that every rejection carries the same envelope.
pub async fn compute(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<OperationOutput>>, ApiError> {
    let body = decode_body(&headers, &body?)?;
    let output = state.compute.execute(&body).await?;
    debug!(operation = %output.operation, "Compute request succeeded");
    Ok(Json(Envelope::success(output.official_email, output.data)))
}

/// Fallback for unknown routes and unsupported methods.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound
}

/// Decode a JSON request body.
///
/// A missing body or a non-JSON content type is an [`ValidationError::InvalidBody`];
/// only bytes that claim to be JSON and fail to parse are `Invalid JSON`.
fn decode_body(headers: &HeaderMap, bytes: &[u8]) -> Result<Value, ApiError> {
    if !has_json_content_type(headers) || bytes.trim_ascii().is_empty() {
        return Err(ValidationError::InvalidBody.into());
    }
    let Json(value) = Json::<Value>::from_bytes(bytes)?;
    Ok(value)
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
