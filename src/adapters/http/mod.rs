//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the landing page routes with the cross-cutting
//! layers (tracing, request timeout, CORS).

pub mod landing;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use landing::LandingAppState;

/// Builds the complete application router.
pub fn app_router(state: LandingAppState, server: &ServerConfig) -> Router {
    landing::routes()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise the listed origins only.
fn cors_layer(origins: &[&str]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}
