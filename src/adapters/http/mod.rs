//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the service: analysis routes plus the shared
//! middleware stack (panic capture, CORS, timeout, request tracing).

pub mod analysis;

use std::any::Any;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::config::{AppConfig, CorsPolicy};

// Re-export key types for convenience
pub use analysis::analysis_routes;
pub use analysis::{AnalysisAppState, ErrorResponse};

/// Builds the full application router from configuration.
pub fn app_router(config: &AppConfig) -> Router {
    let router = analysis_routes(AnalysisAppState::from_config(config))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(config))
        .layer(CatchPanicLayer::custom(panic_response));

    if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match config.server.cors_policy() {
        CorsPolicy::Listed(origins) => {
            let origins: Vec<HeaderValue> = origins
                .into_iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
        CorsPolicy::AnyOrigin => layer.allow_origin(AllowOrigin::any()),
        CorsPolicy::SameOriginOnly => layer,
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("An internal error occurred")),
    )
        .into_response()
}
