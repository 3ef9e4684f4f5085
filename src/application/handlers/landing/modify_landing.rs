//! ModifyLandingHandler - Apply a conversational instruction to an existing page.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::ValidationError;
use crate::domain::landing::{
    build_context, build_modification_prompt, ensure_complete, parse_model_response,
    render_error_document, strip_code_fences, validate_history, validate_modification,
    ConversationEntry, UpstreamError,
};
use crate::ports::{
    AIProvider, CompletionRequest, FinishReason, MessageRole, RequestMetadata, TransformationKind,
};

use super::{FailurePolicy, TransformationSettings};

/// Command to modify a landing page.
#[derive(Debug, Clone)]
pub struct ModifyLandingCommand {
    pub current_document: String,
    pub instruction: String,
    /// Prior turns, oldest first, as round-tripped by the client.
    pub history: Vec<ConversationEntry>,
}

/// Result of a modification.
#[derive(Debug, Clone)]
pub struct ModifyLandingResult {
    /// Complete modified HTML document.
    pub document: String,
    /// Short explanation of the changes.
    pub summary: String,
    /// True when the model ignored the section format.
    pub used_fallback_parse: bool,
}

/// Error type for modification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModifyLandingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Handler for conversational modifications.
pub struct ModifyLandingHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    settings: TransformationSettings,
    failure_policy: FailurePolicy,
}

impl<P: ?Sized + AIProvider> ModifyLandingHandler<P> {
    pub fn new(ai_provider: Arc<P>, settings: TransformationSettings) -> Self {
        Self {
            ai_provider,
            settings,
            failure_policy: FailurePolicy::for_modification(),
        }
    }

    /// Overrides the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Checks the command without invoking the model.
    pub fn validate(cmd: &ModifyLandingCommand) -> Result<(), ValidationError> {
        validate_modification(&cmd.current_document, &cmd.instruction)?;
        validate_history(&cmd.history)
    }

    pub async fn handle(
        &self,
        cmd: ModifyLandingCommand,
    ) -> Result<ModifyLandingResult, ModifyLandingError> {
        if let Err(err) = Self::validate(&cmd) {
            tracing::debug!(field = err.field(), error = %err, "modification rejected");
            return Err(err.into());
        }

        let trace_id = Uuid::new_v4().to_string();
        let context = build_context(&cmd.history);
        let prompt =
            build_modification_prompt(&cmd.current_document, cmd.instruction.trim(), &context);
        let request = CompletionRequest::new(RequestMetadata::new(
            TransformationKind::Modification,
            trace_id.clone(),
        ))
        .with_message(MessageRole::System, prompt.system_role)
        .with_message(MessageRole::User, prompt.user_message)
        .with_temperature(self.settings.modification_temperature)
        .with_max_tokens(self.settings.max_output_tokens);

        tracing::info!(
            trace_id = %trace_id,
            history_len = cmd.history.len(),
            "invoking model for modification"
        );

        let response = match self.ai_provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                let upstream = UpstreamError::from(err);
                tracing::error!(
                    trace_id = %trace_id,
                    code = upstream.category.code(),
                    error = %upstream.raw_message,
                    "modification failed upstream"
                );
                return self.on_failure(upstream);
            }
        };

        tracing::info!(
            trace_id = %trace_id,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "modification completed"
        );
        if response.finish_reason == FinishReason::Length {
            tracing::warn!(trace_id = %trace_id, "modification truncated at max output tokens");
        }

        let parsed = parse_model_response(&response.content);
        if parsed.used_fallback {
            tracing::warn!(
                trace_id = %trace_id,
                "model response missing section markers, using whole response as document"
            );
        }

        Ok(ModifyLandingResult {
            document: ensure_complete(&strip_code_fences(&parsed.document)),
            summary: parsed.summary,
            used_fallback_parse: parsed.used_fallback,
        })
    }

    fn on_failure(
        &self,
        upstream: UpstreamError,
    ) -> Result<ModifyLandingResult, ModifyLandingError> {
        match self.failure_policy {
            FailurePolicy::PropagateFailure => Err(upstream.into()),
            FailurePolicy::FallbackOnFailure => Ok(ModifyLandingResult {
                document: render_error_document(&upstream),
                summary: upstream.category.description().to_string(),
                used_fallback_parse: false,
            }),
        }
    }
}
