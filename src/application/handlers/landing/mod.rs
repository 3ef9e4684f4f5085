//! Landing page transformation handlers.
//!
//! Each handler follows Validate → BuildPrompt → Invoke → [Parse] → Normalize
//! and applies its own [`FailurePolicy`] when the model invocation fails.

mod failure_policy;
mod generate_landing;
mod modify_landing;
mod orchestrator;
mod settings;

pub use failure_policy::FailurePolicy;
pub use generate_landing::{
    GenerateLandingCommand, GenerateLandingError, GenerateLandingHandler, GenerateLandingResult,
};
pub use modify_landing::{
    ModifyLandingCommand, ModifyLandingError, ModifyLandingHandler, ModifyLandingResult,
};
pub use orchestrator::TransformationOrchestrator;
pub use settings::TransformationSettings;
