pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::chat::ChatMessage;
use self::openai::OpenAIChatClient;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider answered with a non-success status; `body` carries the
    /// raw error payload verbatim.
    #[error("provider returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API key format: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("provider response contained no choices")]
    EmptyResponse,
}

/// A chat completion provider. Takes the full ordered conversation as
/// context and returns the assistant's reply text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client = OpenAIChatClient::from_config(config)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
pub(crate) mod test_stub {
    use super::*;

    /// Canned-reply provider for tests.
    pub struct StubClient {
        pub reply: String,
    }

    #[async_trait]
    impl ChatClient for StubClient {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            Ok(self.reply.clone())
        }
    }

    /// Provider that always fails with the given status and body.
    pub struct FailingClient {
        pub status: reqwest::StatusCode,
        pub body: String,
    }

    #[async_trait]
    impl ChatClient for FailingClient {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            Err(LlmError::Provider {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }
}
