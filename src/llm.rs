//! Completion call path used by the generation tools.
//!
//! Prefers a configured proxy (`SYMBOLS_MCP_URL`, no credential needed) and
//! falls back to calling the upstream API through the local [`Gateway`].

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::ServerConfig;
use crate::gateway::{ChatRequest, Gateway, GatewayError, DEFAULT_TEMPERATURE};

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Either SYMBOLS_MCP_URL or OPENROUTER_API_KEY must be set")]
    NotConfigured,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("proxy request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion response has no choices[0].message.content")]
    MalformedResponse,
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    proxy_chat_url: Option<String>,
    gateway: Arc<Gateway>,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &ServerConfig, gateway: Arc<Gateway>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            client,
            proxy_chat_url: config.proxy_url.as_ref().map(|p| format!("{p}/api/chat")),
            gateway,
            model: config.llm_model.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.proxy_chat_url.is_some() || self.gateway.has_credential()
    }

    /// Send `prompt` as a single user message and return the reply text.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let request = ChatRequest::user_prompt(prompt, &self.model, max_tokens, DEFAULT_TEMPERATURE);

        let reply = if let Some(url) = &self.proxy_chat_url {
            debug!("Requesting completion through proxy {url}");
            self.client
                .post(url)
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json::<Value>()
                .await?
        } else if self.gateway.has_credential() {
            self.gateway.forward(&request).await?
        } else {
            return Err(LlmError::NotConfigured);
        };

        extract_content(&reply)
    }
}

/// Pull `choices[0].message.content` out of a chat-completions reply.
pub fn extract_content(reply: &Value) -> Result<String, LlmError> {
    reply
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(LlmError::MalformedResponse)
}
