//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod landing;

pub use landing::{
    FailurePolicy, GenerateLandingCommand, GenerateLandingError, GenerateLandingHandler,
    GenerateLandingResult, ModifyLandingCommand, ModifyLandingError, ModifyLandingHandler,
    ModifyLandingResult, TransformationOrchestrator, TransformationSettings,
};
