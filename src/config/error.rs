//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host for socket address: {0}")]
    InvalidSocketAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout {request_secs}s must exceed the model timeout {model_secs}s")]
    RequestTimeoutBelowModel { request_secs: u64, model_secs: u64 },

    #[error("Temperature {0} is outside [0, 1]")]
    TemperatureOutOfRange(f32),

    #[error("Maximum output tokens must be greater than zero")]
    InvalidMaxOutputTokens,
}
