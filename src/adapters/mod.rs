//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Model providers (OpenAI, offline demo, test mock)
//! - `http` - REST API (axum)

pub mod ai;
pub mod http;

pub use http::{app_router, LandingAppState};
