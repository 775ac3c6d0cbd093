use async_trait::async_trait;
use log::info;
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION}};
use serde::{Deserialize, Serialize};

use super::{ChatClient, LlmConfig, LlmError};
use crate::models::chat::ChatMessage;

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAIChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAIChatClient {
    pub fn new(
        api_key: &str,
        model: String,
        base_url: String,
        timeout: std::time::Duration,
    ) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            model,
            base_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::new(
            &config.api_key,
            config.model.clone(),
            config.base_url.clone(),
            config.timeout,
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let req = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let resp = self.http.post(self.completions_url())
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Provider { status, body });
        }

        let parsed = resp.json::<ChatCompletionResponse>().await?;
        let content = parsed.choices.into_iter().next()
            .ok_or(LlmError::EmptyResponse)?
            .message.content;

        info!("Provider replied with {} chars", content.len());
        Ok(content)
    }
}
