//! HTTP DTOs for landing page endpoints
//!
//! Field names on the wire follow the browser client (`currentHTML`,
//! `modificationRequest`, `conversationHistory`), independent of domain naming.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::landing::{ConversationEntry, UpstreamError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to generate a landing page
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateLandingRequest {
    pub prompt: String,
}

/// Request to modify (or validate a modification of) a landing page
#[derive(Debug, Clone, Deserialize)]
pub struct ModifyLandingRequest {
    #[serde(rename = "currentHTML")]
    pub current_html: String,
    #[serde(rename = "modificationRequest")]
    pub modification_request: String,
    #[serde(rename = "conversationHistory", default)]
    pub conversation_history: Option<Vec<ConversationEntry>>,
}

impl ModifyLandingRequest {
    pub fn history(&self) -> &[ConversationEntry] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Success envelope shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}

/// Data of a generation
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLandingData {
    pub html: String,
    /// Present when `html` is an error page describing an upstream failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_code: Option<&'static str>,
}

/// Data of a modification
#[derive(Debug, Clone, Serialize)]
pub struct ModifiedLandingData {
    pub html: String,
    pub changes_summary: String,
}

/// Example inputs
#[derive(Debug, Clone, Serialize)]
pub struct ExamplesData {
    pub examples: Vec<&'static str>,
}

/// Outcome of a dry-run validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationData {
    pub valid: bool,
}

/// Service health
#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    pub service: &'static str,
    pub status: &'static str,
    pub provider: String,
    pub model: String,
}

/// Service banner returned at the root path
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "field": err.field() })),
        }
    }

    pub fn upstream(err: &UpstreamError) -> Self {
        Self {
            code: err.category.code().to_string(),
            message: err.category.description().to_string(),
            details: Some(serde_json::json!({
                "category": err.category,
                "raw_message": err.raw_message,
            })),
        }
    }
}
