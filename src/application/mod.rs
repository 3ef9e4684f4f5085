//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    FailurePolicy, GenerateLandingCommand, GenerateLandingError, GenerateLandingHandler,
    GenerateLandingResult, ModifyLandingCommand, ModifyLandingError, ModifyLandingHandler,
    ModifyLandingResult, TransformationOrchestrator, TransformationSettings,
};
