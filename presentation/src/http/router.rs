//! Router assembly and middleware stack

use super::error::ApiError;
use super::handlers::{compute, health, route_not_found};
use crate::config::HttpConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bfhl_application::{ComputeUseCase, HealthCheckUseCase};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub compute: Arc<ComputeUseCase>,
    pub health: Arc<HealthCheckUseCase>,
}

impl AppState {
    pub fn new(compute: ComputeUseCase, health: HealthCheckUseCase) -> Self {
        Self {
            compute: Arc::new(compute),
            health: Arc::new(health),
        }
    }
}

/// Build the application router.
///
/// Layers, outermost first: CORS (optional), panic catcher, request
/// tracing, body limit.
pub fn build_router(state: AppState, config: &HttpConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health).fallback(route_not_found))
        .route("/bfhl", post(compute).fallback(route_not_found))
        .fallback(route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response));

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ApiError::Internal(detail).into_response()
}
