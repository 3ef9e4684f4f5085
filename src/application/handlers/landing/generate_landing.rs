//! GenerateLandingHandler - Produce a complete landing page from a description.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::ValidationError;
use crate::domain::landing::{
    build_generation_prompt, ensure_complete, render_error_document, strip_code_fences,
    validate_generation_prompt, UpstreamError,
};
use crate::ports::{
    AIProvider, CompletionRequest, FinishReason, MessageRole, RequestMetadata, TransformationKind,
};

use super::{FailurePolicy, TransformationSettings};

/// Command to generate a landing page.
#[derive(Debug, Clone)]
pub struct GenerateLandingCommand {
    pub prompt: String,
}

/// Result of a generation.
#[derive(Debug, Clone)]
pub struct GenerateLandingResult {
    /// Complete HTML document (a generated page or an error page).
    pub document: String,
    /// Set when the document is an error page produced by the fallback policy.
    pub upstream_error: Option<UpstreamError>,
}

impl GenerateLandingResult {
    /// True when the model produced the document.
    pub fn is_generated(&self) -> bool {
        self.upstream_error.is_none()
    }
}

/// Error type for generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateLandingError {
    /// Input rejected before invoking the model.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Model invocation failed and the handler propagates failures.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Handler for initial landing page generation.
pub struct GenerateLandingHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    settings: TransformationSettings,
    failure_policy: FailurePolicy,
}

impl<P: ?Sized + AIProvider> GenerateLandingHandler<P> {
    pub fn new(ai_provider: Arc<P>, settings: TransformationSettings) -> Self {
        Self {
            ai_provider,
            settings,
            failure_policy: FailurePolicy::for_generation(),
        }
    }

    /// Overrides the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateLandingCommand,
    ) -> Result<GenerateLandingResult, GenerateLandingError> {
        if let Err(err) = validate_generation_prompt(&cmd.prompt) {
            tracing::debug!(field = err.field(), error = %err, "generation prompt rejected");
            return Err(err.into());
        }

        let trace_id = Uuid::new_v4().to_string();
        let prompt = build_generation_prompt(cmd.prompt.trim());
        let request = CompletionRequest::new(RequestMetadata::new(
            TransformationKind::Generation,
            trace_id.clone(),
        ))
        .with_message(MessageRole::System, prompt.system_role)
        .with_message(MessageRole::User, prompt.user_message)
        .with_temperature(self.settings.generation_temperature)
        .with_max_tokens(self.settings.max_output_tokens);

        tracing::info!(trace_id = %trace_id, "invoking model for generation");

        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                let upstream = UpstreamError::from(err);
                tracing::error!(
                    trace_id = %trace_id,
                    code = upstream.category.code(),
                    error = %upstream.raw_message,
                    "generation failed upstream"
                );
                return self.on_failure(upstream);
            }
        };

        tracing::info!(
            trace_id = %trace_id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "generation completed"
        );
        if response.finish_reason == FinishReason::Length {
            tracing::warn!(trace_id = %trace_id, "generation truncated at max output tokens");
        }

        let document = ensure_complete(&strip_code_fences(&response.content));

        Ok(GenerateLandingResult {
            document,
            upstream_error: None,
        })
    }

    fn on_failure(
        &self,
        upstream: UpstreamError,
    ) -> Result<GenerateLandingResult, GenerateLandingError> {
        match self.failure_policy {
            FailurePolicy::FallbackOnFailure => Ok(GenerateLandingResult {
                document: render_error_document(&upstream),
                upstream_error: Some(upstream),
            }),
            FailurePolicy::PropagateFailure => Err(upstream.into()),
        }
    }
}
