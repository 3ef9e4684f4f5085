//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completion models (GPT-3.5, GPT-4)
//! - `DemoProvider` - Offline keyword-themed templates, no API key needed
//! - `MockAIProvider` - Configurable mock for testing

mod demo_provider;
mod mock_provider;
mod openai_provider;

pub use demo_provider::{DemoProvider, DemoTheme, DEMO_MODIFICATION_SUMMARY};
pub use mock_provider::{MockAIProvider, MockError};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
