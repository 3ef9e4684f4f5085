//! What a transformation does when the model invocation fails.

use crate::domain::landing::{UpstreamCategory, UpstreamError};
use crate::ports::AIError;

/// Failure policy of a transformation handler.
///
/// Generation and modification deliberately differ: a failed generation still
/// hands the client a page to render, a failed modification must not replace
/// the client's working document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Convert the classified failure into a self-describing HTML error document
    /// and return it as a successful result.
    FallbackOnFailure,
    /// Return the classified failure to the caller.
    PropagateFailure,
}

impl FailurePolicy {
    /// Policy applied to initial generation.
    pub const fn for_generation() -> Self {
        FailurePolicy::FallbackOnFailure
    }

    /// Policy applied to conversational modification.
    pub const fn for_modification() -> Self {
        FailurePolicy::PropagateFailure
    }
}

/// Classifies by the structured error kind first, then by signature.
impl From<AIError> for UpstreamError {
    fn from(err: AIError) -> Self {
        let category = match &err {
            AIError::QuotaExceeded(_) => UpstreamCategory::Quota,
            AIError::AuthenticationFailed(_) => UpstreamCategory::Auth,
            AIError::RateLimited { .. } => UpstreamCategory::RateLimit,
            AIError::ModelNotFound(_) => UpstreamCategory::ModelUnavailable,
            _ => return UpstreamError::classify(err.to_string()),
        };

        UpstreamError::new(category, err.to_string())
    }
}
