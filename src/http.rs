use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{orchestrator::ModerationOrchestrator, types::PromptOutcome};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ModerationOrchestrator>,
}

#[derive(Debug, Deserialize)]
pub struct ModerateRequest {
    pub prompt: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/moderate", post(moderate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(bind: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("promptguard HTTP API listening on {bind}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

// The pipeline is total, so the handler has no error branch.
async fn moderate(
    State(state): State<AppState>,
    Json(request): Json<ModerateRequest>,
) -> Json<PromptOutcome> {
    Json(state.orchestrator.process_prompt(&request.prompt).await)
}
