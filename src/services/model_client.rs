use async_trait::async_trait;
use thiserror::Error;

use super::anthropic::{MessageRequest, MessageResponse};

#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The API answered with a non-success status.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never got an HTTP answer (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(String),

    #[error("ANTHROPIC_API_KEY is not set")]
    MissingApiKey,

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Sends one Messages API request and returns the decoded reply.
///
/// Implemented by [`super::anthropic::AnthropicClient`] in production and by
/// in-process stubs in tests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse, ModelError>;
}
