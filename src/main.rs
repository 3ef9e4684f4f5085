use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use landing_studio::adapters::ai::{DemoProvider, OpenAIConfig, OpenAIProvider};
use landing_studio::adapters::{app_router, LandingAppState};
use landing_studio::application::{TransformationOrchestrator, TransformationSettings};
use landing_studio::config::{AiConfig, AiProviderKind, AppConfig};
use landing_studio::ports::{AIError, AIProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let provider = build_provider(&config.ai)?;
    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "model provider ready");

    let settings = TransformationSettings {
        generation_temperature: config.ai.generation_temperature,
        modification_temperature: config.ai.modification_temperature,
        max_output_tokens: config.ai.max_output_tokens,
    };
    let orchestrator = Arc::new(TransformationOrchestrator::new(provider, settings));
    let app = app_router(LandingAppState::new(orchestrator), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "landing studio listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured directive; JSON output in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match ai.provider {
        AiProviderKind::Demo => Ok(Arc::new(DemoProvider::new())),
        AiProviderKind::OpenAI => {
            let mut openai = OpenAIConfig::new(ai.openai_api_key.clone().unwrap_or_default())
                .with_model(&ai.model)
                .with_timeout(ai.timeout());
            if let Some(base_url) = &ai.base_url {
                openai = openai.with_base_url(base_url);
            }
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
