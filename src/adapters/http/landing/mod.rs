//! HTTP adapters for landing page generation and modification
//!
//! Exposes the REST API consumed by the browser client.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::LandingAppState;
pub use routes::routes;
