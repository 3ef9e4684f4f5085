//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider serves completions
    #[serde(default)]
    pub provider: AiProviderKind,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the OpenAI-compatible base URL
    pub base_url: Option<String>,

    /// Model request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature for initial generation
    #[serde(default = "default_generation_temperature")]
    pub generation_temperature: f32,

    /// Sampling temperature for modifications
    #[serde(default = "default_modification_temperature")]
    pub modification_temperature: f32,

    /// Maximum output tokens per completion
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    OpenAI,
    /// Offline templates, no API key needed
    Demo,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == AiProviderKind::OpenAI && !self.has_openai() {
            return Err(ValidationError::MissingRequired("AI__OPENAI_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        for temperature in [self.generation_temperature, self.modification_temperature] {
            if !(0.0..=1.0).contains(&temperature) {
                return Err(ValidationError::TemperatureOutOfRange(temperature));
            }
        }
        if self.max_output_tokens == 0 {
            return Err(ValidationError::InvalidMaxOutputTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProviderKind::default(),
            openai_api_key: None,
            model: default_model(),
            base_url: None,
            timeout_secs: default_timeout(),
            generation_temperature: default_generation_temperature(),
            modification_temperature: default_modification_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_generation_temperature() -> f32 {
    0.7
}

fn default_modification_temperature() -> f32 {
    0.3
}

fn default_max_output_tokens() -> u32 {
    4000
}
