//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the landing page domain.

mod errors;

pub use errors::ValidationError;
