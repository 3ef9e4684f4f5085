//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! A single request is made per completion. Failures are reported once and
//! never retried here; callers decide what a failure means for them.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-3.5-turbo", "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
///
/// Owns one `reqwest::Client` (and its connection pool) for its whole lifetime.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| OpenAIMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                }
                .to_string(),
                content: msg.content.clone(),
            })
            .collect();

        OpenAIRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request to the completions endpoint.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request);

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps non-success responses to port errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(error_from_status(status.as_u16(), &error_body))
    }

    /// Parses a successful response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        let usage = openai_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
            model: openai_response.model,
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        let max_context = match self.config.model.as_str() {
            m if m.starts_with("gpt-4o") || m.starts_with("gpt-4-turbo") => 128_000,
            m if m.starts_with("gpt-4") => 8_192,
            m if m.starts_with("gpt-3.5") => 16_385,
            _ => 128_000,
        };

        ProviderInfo::new("openai", &self.config.model, max_context)
    }
}

/// Translates an error status and body into a port error.
///
/// The structured `error.code` / `error.type` of the body decides first; the
/// HTTP status is used when the body carries neither. The raw diagnostic is
/// kept in the error message so signature-based classification still works.
fn error_from_status(status: u16, error_body: &str) -> AIError {
    let detail = ApiErrorEnvelope::parse(error_body);
    let signature = detail
        .as_ref()
        .and_then(|d| d.code.as_deref().or(d.kind.as_deref()))
        .unwrap_or_default();
    let diagnostic = match &detail {
        Some(d) => format!("{} ({})", d.message, signature),
        None => format!("status {}: {}", status, error_body),
    };

    match signature {
        "insufficient_quota" => return AIError::QuotaExceeded(diagnostic),
        "invalid_api_key" => return AIError::AuthenticationFailed(diagnostic),
        "model_not_found" => return AIError::ModelNotFound(diagnostic),
        _ => {}
    }

    match status {
        401 | 403 => AIError::AuthenticationFailed(diagnostic),
        404 => AIError::ModelNotFound(diagnostic),
        429 => AIError::rate_limited(diagnostic, parse_retry_after(error_body)),
        400 => AIError::InvalidRequest(diagnostic),
        500..=599 => AIError::unavailable(diagnostic),
        _ => AIError::network(diagnostic),
    }
}

/// Parses "try again in Xs" from a rate limit message.
fn parse_retry_after(error_body: &str) -> u32 {
    let Some(detail) = ApiErrorEnvelope::parse(error_body) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };

    detail
        .message
        .split_once("try again in ")
        .and_then(|(_, rest)| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

impl ApiErrorEnvelope {
    fn parse(body: &str) -> Option<ApiErrorDetail> {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{RequestMetadata, TransformationKind};

    fn error_body(message: &str, kind: &str, code: Option<&str>) -> String {
        serde_json::json!({
            "error": { "message": message, "type": kind, "code": code }
        })
        .to_string()
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults_to_gpt35() {
        let config = OpenAIConfig::new("k");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let provider =
            OpenAIProvider::new(OpenAIConfig::new("k").with_base_url("http://localhost:9/v1/"))
                .unwrap();
        assert_eq!(provider.completions_url(), "http://localhost:9/v1/chat/completions");
    }

    #[test]
    fn request_keeps_message_order_and_sampling() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let request = CompletionRequest::new(RequestMetadata::new(
            TransformationKind::Modification,
            "t-1",
        ))
        .with_message(MessageRole::System, "rules")
        .with_message(MessageRole::User, "change it")
        .with_temperature(0.3)
        .with_max_tokens(4000);

        let json = serde_json::to_value(provider.to_openai_request(&request)).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "change it");
        assert_eq!(json["max_tokens"], 4000);
        assert!(json.get("stream").is_none());
    }

    #[test]
    fn insufficient_quota_maps_to_quota_even_with_429() {
        let body = error_body("You exceeded your current quota", "insufficient_quota", Some("insufficient_quota"));

        let err = error_from_status(429, &body);

        assert!(matches!(err, AIError::QuotaExceeded(ref m) if m.contains("insufficient_quota")));
    }

    #[test]
    fn invalid_key_maps_to_authentication_failed() {
        let body = error_body("Incorrect API key provided", "invalid_request_error", Some("invalid_api_key"));

        assert!(matches!(error_from_status(401, &body), AIError::AuthenticationFailed(_)));
    }

    #[test]
    fn unknown_model_maps_to_model_not_found() {
        let body = error_body("The model `gpt-9` does not exist", "invalid_request_error", Some("model_not_found"));

        assert!(matches!(error_from_status(404, &body), AIError::ModelNotFound(_)));
    }

    #[test]
    fn rate_limit_parses_retry_after() {
        let body = error_body(
            "Rate limit reached. Please try again in 20s.",
            "requests",
            Some("rate_limit_exceeded"),
        );

        match error_from_status(429, &body) {
            AIError::RateLimited {
                message,
                retry_after_secs,
            } => {
                assert_eq!(retry_after_secs, 20);
                assert!(message.contains("Rate limit reached"));
                assert!(message.contains("rate_limit_exceeded"));
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_hint_uses_default() {
        assert!(matches!(
            error_from_status(429, "not json"),
            AIError::RateLimited { retry_after_secs: DEFAULT_RETRY_AFTER_SECS, .. }
        ));
    }

    #[test]
    fn server_errors_map_to_unavailable() {
        assert!(matches!(error_from_status(503, "overloaded"), AIError::Unavailable { .. }));
    }

    #[test]
    fn provider_info_reports_model() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let info = provider.provider_info();

        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-3.5-turbo");
        assert_eq!(info.max_context_tokens, 16_385);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let provider = OpenAIProvider::new(
            OpenAIConfig::new("k")
                .with_base_url("http://127.0.0.1:9/v1")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let request = CompletionRequest::new(RequestMetadata::new(TransformationKind::Generation, "t"))
            .with_message(MessageRole::User, "hello");

        let err = provider.complete(request).await.unwrap_err();

        assert!(matches!(err, AIError::Network(_) | AIError::Timeout { .. }));
    }
}
