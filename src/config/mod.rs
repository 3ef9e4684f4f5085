//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LANDING_STUDIO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use landing_studio::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProviderKind};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every value has a default except the OpenAI API key, which is required
/// only when the OpenAI provider is selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (provider, model, sampling)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LANDING_STUDIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LANDING_STUDIO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LANDING_STUDIO__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key = sk-...`
    /// - `LANDING_STUDIO__AI__PROVIDER=demo` -> `ai.provider = demo`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LANDING_STUDIO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::RequestTimeoutBelowModel {
                request_secs: self.server.request_timeout_secs,
                model_secs: self.ai.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "LANDING_STUDIO__SERVER__PORT",
        "LANDING_STUDIO__SERVER__ENVIRONMENT",
        "LANDING_STUDIO__SERVER__CORS_ORIGINS",
        "LANDING_STUDIO__AI__PROVIDER",
        "LANDING_STUDIO__AI__OPENAI_API_KEY",
        "LANDING_STUDIO__AI__MODEL",
        "LANDING_STUDIO__AI__GENERATION_TEMPERATURE",
        "LANDING_STUDIO__AI__TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.provider, AiProviderKind::OpenAI);
        assert_eq!(config.ai.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("LANDING_STUDIO__SERVER__PORT", "3000"),
            ("LANDING_STUDIO__AI__OPENAI_API_KEY", "sk-test"),
            ("LANDING_STUDIO__AI__MODEL", "gpt-4o-mini"),
            ("LANDING_STUDIO__AI__GENERATION_TEMPERATURE", "0.9"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.ai.generation_temperature, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_provider_validates_without_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("LANDING_STUDIO__AI__PROVIDER", "demo")]).unwrap();

        assert_eq!(config.ai.provider, AiProviderKind::Demo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_openai_without_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_must_outlast_model_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("LANDING_STUDIO__AI__PROVIDER", "demo"),
            ("LANDING_STUDIO__AI__TIMEOUT_SECS", "120"),
        ])
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::RequestTimeoutBelowModel {
                request_secs: 90,
                model_secs: 120
            })
        ));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("LANDING_STUDIO__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
    }
}
