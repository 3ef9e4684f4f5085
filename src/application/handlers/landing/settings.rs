//! Sampling parameters shared by the transformation handlers.

/// Per-transformation model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformationSettings {
    /// Temperature for initial generation (creative).
    pub generation_temperature: f32,
    /// Temperature for modification (precise).
    pub modification_temperature: f32,
    /// Upper bound on output tokens for either transformation.
    pub max_output_tokens: u32,
}

impl Default for TransformationSettings {
    fn default() -> Self {
        Self {
            generation_temperature: 0.7,
            modification_temperature: 0.3,
            max_output_tokens: 4000,
        }
    }
}
