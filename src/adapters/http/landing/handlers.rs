//! HTTP handlers for landing page endpoints
//!
//! These handlers connect Axum routes to the transformation orchestrator.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{GenerateLandingError, ModifyLandingError, TransformationOrchestrator};
use crate::domain::foundation::ValidationError;
use crate::domain::landing::{
    UpstreamCategory, UpstreamError, GENERATION_EXAMPLES, MODIFICATION_EXAMPLES,
};

use super::dto::{
    ApiResponse, BannerResponse, ErrorResponse, ExamplesData, GenerateLandingRequest,
    GeneratedLandingData, HealthData, ModifiedLandingData, ModifyLandingRequest, ValidationData,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state
#[derive(Clone)]
pub struct LandingAppState {
    pub orchestrator: Arc<TransformationOrchestrator>,
}

impl LandingAppState {
    pub fn new(orchestrator: Arc<TransformationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

fn validation_error(err: &ValidationError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(err)))
}

fn upstream_error(err: &UpstreamError) -> ApiError {
    let status = match err.category {
        UpstreamCategory::RateLimit => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ErrorResponse::upstream(err)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Service banner
///
/// GET /
pub async fn banner() -> impl IntoResponse {
    Json(BannerResponse {
        message: "AI Landing Page Generator API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Generate a landing page from a description
///
/// POST /api/generate-landing
pub async fn generate_landing(
    State(app_state): State<LandingAppState>,
    Json(req): Json<GenerateLandingRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let result = app_state
        .orchestrator
        .generate(req.prompt)
        .await
        .map_err(|e| match &e {
            GenerateLandingError::Validation(err) => validation_error(err),
            GenerateLandingError::Upstream(err) => upstream_error(err),
        })?;

    let message = match &result.upstream_error {
        None => "Landing page generated successfully",
        Some(_) => "Landing page generation failed; returned an error page",
    };
    let data = GeneratedLandingData {
        upstream_code: result.upstream_error.as_ref().map(|e| e.category.code()),
        html: result.document,
    };

    Ok::<_, ApiError>(Json(ApiResponse::success(message, data)))
}

/// List example generation prompts
///
/// GET /api/generate-examples
pub async fn generation_examples() -> impl IntoResponse {
    Json(ApiResponse::success(
        "Generation examples retrieved successfully",
        ExamplesData {
            examples: GENERATION_EXAMPLES.to_vec(),
        },
    ))
}

/// Apply a modification instruction to an existing page
///
/// POST /api/modify-landing
pub async fn modify_landing(
    State(app_state): State<LandingAppState>,
    Json(req): Json<ModifyLandingRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let history = req.history().to_vec();
    let result = app_state
        .orchestrator
        .modify(req.current_html, req.modification_request, history)
        .await
        .map_err(|e| match &e {
            ModifyLandingError::Validation(err) => validation_error(err),
            ModifyLandingError::Upstream(err) => upstream_error(err),
        })?;

    Ok::<_, ApiError>(Json(ApiResponse::success(
        "Modification applied successfully",
        ModifiedLandingData {
            html: result.document,
            changes_summary: result.summary,
        },
    )))
}

/// List example modification instructions
///
/// GET /api/modify-examples
pub async fn modification_examples() -> impl IntoResponse {
    Json(ApiResponse::success(
        "Modification examples retrieved successfully",
        ExamplesData {
            examples: MODIFICATION_EXAMPLES.to_vec(),
        },
    ))
}

/// Validate a modification request without invoking the model
///
/// POST /api/validate-modification
pub async fn validate_modification(
    State(app_state): State<LandingAppState>,
    Json(req): Json<ModifyLandingRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    app_state
        .orchestrator
        .validate_modification(&req.current_html, &req.modification_request, req.history())
        .map_err(|e| validation_error(&e))?;

    Ok::<_, ApiError>(Json(ApiResponse::success(
        "Modification request is valid",
        ValidationData { valid: true },
    )))
}

/// Service health
///
/// GET /api/health
pub async fn health(State(app_state): State<LandingAppState>) -> impl IntoResponse {
    let info = app_state.orchestrator.provider_info();

    Json(ApiResponse::success(
        "Landing page service is healthy",
        HealthData {
            service: "landing-studio",
            status: "healthy",
            provider: info.name,
            model: info.model,
        },
    ))
}
