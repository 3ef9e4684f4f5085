//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `landing` - Landing page transformation pipeline (prompts, conversation
//!   context, response parsing, HTML normalization, upstream error classification)

pub mod foundation;
pub mod landing;
