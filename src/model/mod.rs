mod mock;
mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockModelProvider;
pub use openai::OpenAiProvider;

#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Failures at the model boundary. Callers can branch on the kind without
/// string-matching; the content filter never sees these.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service declined the request with status {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("malformed model response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("model returned no choices")]
    EmptyResponse,
}

#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, request: ModelRequest) -> Result<String, ModelError>;
}
