//! Classification of failures reported by the model provider.

use std::fmt;

use serde::Serialize;

/// Stable categories for upstream model failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamCategory {
    /// Account quota or billing exhausted.
    Quota,
    /// Credentials rejected.
    Auth,
    /// Too many requests in a short period.
    RateLimit,
    /// Requested model does not exist or is not accessible.
    ModelUnavailable,
    /// Anything else (network, timeouts, server errors, malformed replies).
    Unknown,
}

impl UpstreamCategory {
    /// Classifies a raw diagnostic by well-known provider error signatures.
    pub fn from_signature(raw_message: &str) -> Self {
        let lower = raw_message.to_lowercase();

        if lower.contains("insufficient_quota") {
            UpstreamCategory::Quota
        } else if lower.contains("invalid_api_key") {
            UpstreamCategory::Auth
        } else if lower.contains("rate_limit") {
            UpstreamCategory::RateLimit
        } else if lower.contains("model_not_found") {
            UpstreamCategory::ModelUnavailable
        } else {
            UpstreamCategory::Unknown
        }
    }

    /// Machine-readable code exposed to callers.
    pub fn code(&self) -> &'static str {
        match self {
            UpstreamCategory::Quota => "UPSTREAM_QUOTA_EXCEEDED",
            UpstreamCategory::Auth => "UPSTREAM_AUTH_FAILED",
            UpstreamCategory::RateLimit => "UPSTREAM_RATE_LIMITED",
            UpstreamCategory::ModelUnavailable => "UPSTREAM_MODEL_UNAVAILABLE",
            UpstreamCategory::Unknown => "UPSTREAM_ERROR",
        }
    }

    /// Human-readable explanation of the category.
    pub fn description(&self) -> &'static str {
        match self {
            UpstreamCategory::Quota => {
                "The AI provider quota has been exceeded. Check your plan and billing details."
            }
            UpstreamCategory::Auth => {
                "The AI provider rejected the API key. Check the service configuration."
            }
            UpstreamCategory::RateLimit => {
                "The AI provider rate limit was exceeded. Try again in a few moments."
            }
            UpstreamCategory::ModelUnavailable => {
                "The configured model was not found. Check that the model is available."
            }
            UpstreamCategory::Unknown => "The AI service failed to complete the request.",
        }
    }
}

impl fmt::Display for UpstreamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A classified failure of the model invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category}: {raw_message}")]
pub struct UpstreamError {
    pub category: UpstreamCategory,
    /// Opaque diagnostic reported by the provider.
    pub raw_message: String,
}

impl UpstreamError {
    /// Creates an error with an explicit category.
    pub fn new(category: UpstreamCategory, raw_message: impl Into<String>) -> Self {
        Self {
            category,
            raw_message: raw_message.into(),
        }
    }

    /// Creates an error classified from its diagnostic text alone.
    pub fn classify(raw_message: impl Into<String>) -> Self {
        let raw_message = raw_message.into();
        Self {
            category: UpstreamCategory::from_signature(&raw_message),
            raw_message,
        }
    }
}
