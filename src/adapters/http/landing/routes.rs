//! Route definitions for landing page endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    banner, generate_landing, generation_examples, health, modification_examples,
    modify_landing, validate_modification, LandingAppState,
};

/// Create the landing page router with all endpoints
///
/// # Endpoints
///
/// - `GET /` - Service banner
/// - `POST /api/generate-landing` - Generate a page from a description
/// - `GET /api/generate-examples` - Example descriptions
/// - `POST /api/modify-landing` - Modify an existing page
/// - `GET /api/modify-examples` - Example instructions
/// - `POST /api/validate-modification` - Validate a modification without running it
/// - `GET /api/health` - Service health
pub fn routes() -> Router<LandingAppState> {
    Router::new()
        .route("/", get(banner))
        .route("/api/generate-landing", post(generate_landing))
        .route("/api/generate-examples", get(generation_examples))
        .route("/api/modify-landing", post(modify_landing))
        .route("/api/modify-examples", get(modification_examples))
        .route("/api/validate-modification", post(validate_modification))
        .route("/api/health", get(health))
}
