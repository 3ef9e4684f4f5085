//! Mock AI Provider for testing.
//!
//! Replays a script of replies and failures in order and records every
//! request it receives, so handler tests can assert on the prompt that was
//! sent as well as on what came back.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("<main>Bakery</main>")
//!     .with_error(MockError::RateLimited { retry_after_secs: 20 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const MOCK_MODEL: &str = "mock-model-1";

/// Reply returned once the script runs out.
const EXHAUSTED_REPLY: &str = "Mock response";

/// Failures a script can inject, one per upstream failure kind.
#[derive(Debug, Clone)]
pub enum MockError {
    QuotaExceeded { message: String },
    AuthenticationFailed { message: String },
    RateLimited { retry_after_secs: u32 },
    ModelNotFound { message: String },
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::QuotaExceeded { message } => AIError::QuotaExceeded(message),
            MockError::AuthenticationFailed { message } => AIError::AuthenticationFailed(message),
            MockError::RateLimited { retry_after_secs } => {
                AIError::rate_limited("mock rate limit", retry_after_secs)
            }
            MockError::ModelNotFound { message } => AIError::ModelNotFound(message),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

#[derive(Debug, Clone)]
struct ScriptedReply {
    content: String,
    usage: TokenUsage,
    finish_reason: FinishReason,
}

/// Scripted provider. Clones share the script and the call log.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Result<ScriptedReply, MockError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply that stops normally.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, TokenUsage::new(10, 20), FinishReason::Stop)
    }

    /// Queues a reply with explicit usage and finish reason.
    pub fn with_response_full(
        self,
        content: impl Into<String>,
        usage: TokenUsage,
        finish_reason: FinishReason,
    ) -> Self {
        lock(&self.script).push_back(Ok(ScriptedReply {
            content: content.into(),
            usage,
            finish_reason,
        }));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.script).push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// The most recent request, if any.
    pub fn last_call(&self) -> Option<CompletionRequest> {
        lock(&self.calls).last().cloned()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        let next = lock(&self.script).pop_front().unwrap_or_else(|| {
            Ok(ScriptedReply {
                content: EXHAUSTED_REPLY.to_string(),
                usage: TokenUsage::new(5, 10),
                finish_reason: FinishReason::Stop,
            })
        });
        let reply = next?;

        Ok(CompletionResponse {
            content: reply.content,
            usage: reply.usage,
            model: MOCK_MODEL.to_string(),
            finish_reason: reply.finish_reason,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL, 128_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, RequestMetadata, TransformationKind};

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(TransformationKind::Generation, "trace-mock"))
            .with_message(MessageRole::User, text)
    }

    #[tokio::test]
    async fn script_is_replayed_in_order_then_exhausts() {
        let provider = MockAIProvider::new()
            .with_response("<main>one</main>")
            .with_error(MockError::RateLimited { retry_after_secs: 30 });

        let first = provider.complete(request("a")).await.unwrap();
        let second = provider.complete(request("b")).await.unwrap_err();
        let third = provider.complete(request("c")).await.unwrap();

        assert_eq!(first.content, "<main>one</main>");
        assert_eq!(first.model, MOCK_MODEL);
        assert!(matches!(second, AIError::RateLimited { retry_after_secs: 30, .. }));
        assert_eq!(third.content, EXHAUSTED_REPLY);
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let provider = MockAIProvider::new();
        let handle = provider.clone();
        assert!(handle.last_call().is_none());

        provider.complete(request("Hello")).await.unwrap();

        assert_eq!(handle.call_count(), 1);
        assert_eq!(
            handle.last_call().unwrap().message_content(MessageRole::User),
            Some("Hello")
        );
    }

    #[tokio::test]
    async fn full_response_keeps_finish_reason() {
        let provider = MockAIProvider::new().with_response_full(
            "<p>cut</p>",
            TokenUsage::new(1, 4000),
            FinishReason::Length,
        );

        let response = provider.complete(request("x")).await.unwrap();

        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.usage.completion_tokens, 4000);
    }

    #[test]
    fn mock_errors_convert_to_matching_port_errors() {
        let err: AIError = MockError::QuotaExceeded { message: "insufficient_quota".into() }.into();
        assert!(matches!(err, AIError::QuotaExceeded(_)));

        let err: AIError = MockError::ModelNotFound { message: "gpt-9".into() }.into();
        assert!(matches!(err, AIError::ModelNotFound(_)));

        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 30 }));
    }
}
