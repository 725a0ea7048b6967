use std::sync::Arc;

use promptguard::{
    config::AppConfig,
    http::{self, AppState},
    model::{MockModelProvider, ModelProvider, OpenAiProvider},
    moderation::ModerationPolicy,
    orchestrator::ModerationOrchestrator,
    repl,
};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let model = build_model_provider(&config);
    let policy = ModerationPolicy::with_default_terms()?;
    let orchestrator = Arc::new(ModerationOrchestrator::new(model, policy));

    if let Some(bind) = config.http_bind {
        let state = AppState {
            orchestrator: orchestrator.clone(),
        };
        tokio::spawn(async move {
            if let Err(error) = http::serve(bind, state).await {
                warn!(?error, "HTTP API stopped with error");
            }
        });
    }

    repl::run(orchestrator).await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

fn build_model_provider(config: &AppConfig) -> Arc<dyn ModelProvider> {
    if let Some(api_key) = config.openai_api_key.clone() {
        Arc::new(OpenAiProvider::new(
            api_key,
            config.openai_model.clone(),
            config.max_tokens,
            config.temperature,
        ))
    } else {
        warn!("OPENAI_API_KEY not set; using mock model provider");
        Arc::new(MockModelProvider)
    }
}
