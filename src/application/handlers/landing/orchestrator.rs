//! TransformationOrchestrator - Single entry point for both transformations.
//!
//! Owns the shared model provider and routes each public operation to its
//! handler. Requests are independent; the orchestrator holds no per-request
//! state and is shared behind an `Arc` across the server.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::landing::ConversationEntry;
use crate::ports::{AIProvider, ProviderInfo};

use super::{
    GenerateLandingCommand, GenerateLandingError, GenerateLandingHandler, GenerateLandingResult,
    ModifyLandingCommand, ModifyLandingError, ModifyLandingHandler, ModifyLandingResult,
    TransformationSettings,
};

pub struct TransformationOrchestrator {
    provider: Arc<dyn AIProvider>,
    generate: GenerateLandingHandler<dyn AIProvider>,
    modify: ModifyLandingHandler<dyn AIProvider>,
}

impl TransformationOrchestrator {
    pub fn new(provider: Arc<dyn AIProvider>, settings: TransformationSettings) -> Self {
        Self {
            generate: GenerateLandingHandler::new(provider.clone(), settings),
            modify: ModifyLandingHandler::new(provider.clone(), settings),
            provider,
        }
    }

    /// Generates a landing page. Upstream failures become an error document.
    pub async fn generate(
        &self,
        prompt: impl Into<String>,
    ) -> Result<GenerateLandingResult, GenerateLandingError> {
        self.generate
            .handle(GenerateLandingCommand {
                prompt: prompt.into(),
            })
            .await
    }

    /// Modifies a landing page. Upstream failures are returned to the caller.
    pub async fn modify(
        &self,
        current_document: impl Into<String>,
        instruction: impl Into<String>,
        history: Vec<ConversationEntry>,
    ) -> Result<ModifyLandingResult, ModifyLandingError> {
        self.modify
            .handle(ModifyLandingCommand {
                current_document: current_document.into(),
                instruction: instruction.into(),
                history,
            })
            .await
    }

    /// Runs the modification checks without invoking the model.
    pub fn validate_modification(
        &self,
        current_document: &str,
        instruction: &str,
        history: &[ConversationEntry],
    ) -> Result<(), ValidationError> {
        ModifyLandingHandler::<dyn AIProvider>::validate(&ModifyLandingCommand {
            current_document: current_document.to_string(),
            instruction: instruction.to_string(),
            history: history.to_vec(),
        })
    }

    pub fn provider_info(&self) -> ProviderInfo {
        self.provider.provider_info()
    }
}
