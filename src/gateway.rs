//! Pass-through gateway to the upstream chat-completions API.
//!
//! Validates that a request carries `messages`, fills in default model,
//! token and temperature parameters, forwards it with the bearer credential
//! and relays the upstream JSON unchanged. One call, fixed timeout, no retry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::ServerConfig;

pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Server configuration error")]
    MissingCredential,
    #[error("Invalid request - messages required")]
    MissingMessages,
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

/// Chat request as accepted from clients; unset fields take gateway defaults.
///
/// Every field is kept as raw JSON so the upstream sees exactly what the
/// client sent, extra per-message fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,
}

impl ChatRequest {
    /// A single user message with explicit generation parameters.
    pub fn user_prompt(prompt: &str, model: &str, max_tokens: u32, temperature: f64) -> Self {
        Self {
            messages: json!([{ "role": "user", "content": prompt }]),
            model: Some(Value::from(model)),
            max_tokens: Some(Value::from(max_tokens)),
            temperature: Some(Value::from(temperature)),
        }
    }

    /// Parse a raw request body. The only requirement is a JSON object
    /// carrying a `messages` key.
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| GatewayError::MissingMessages)?;
        match value.as_object() {
            Some(obj) if obj.contains_key("messages") => {}
            _ => return Err(GatewayError::MissingMessages),
        }
        serde_json::from_value(value).map_err(|_| GatewayError::MissingMessages)
    }
}

/// Body actually sent upstream, with every default resolved.
#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    model: &'a Value,
    messages: &'a Value,
    max_tokens: &'a Value,
    temperature: &'a Value,
}

#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    api_key: Option<String>,
    completions_url: String,
    referer: String,
    default_model: String,
}

impl Gateway {
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            client,
            api_key: config.openrouter_api_key.clone(),
            completions_url: format!("{}/chat/completions", config.upstream_base_url),
            referer: config.referer.clone(),
            default_model: config.llm_model.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `/api/chat` contract: credential check, body validation, forward.
    ///
    /// The credential is checked before the body is looked at.
    pub async fn handle(&self, body: &[u8]) -> Result<Value, GatewayError> {
        if !self.has_credential() {
            return Err(GatewayError::MissingCredential);
        }
        let request = ChatRequest::from_body(body)?;
        self.forward(&request).await
    }

    /// Forward a validated request and return the upstream JSON body.
    pub async fn forward(&self, request: &ChatRequest) -> Result<Value, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingCredential)?;

        let default_model = Value::from(self.default_model.as_str());
        let default_max_tokens = Value::from(DEFAULT_MAX_TOKENS);
        let default_temperature = Value::from(DEFAULT_TEMPERATURE);
        let body = UpstreamRequest {
            model: request.model.as_ref().unwrap_or(&default_model),
            messages: &request.messages,
            max_tokens: request.max_tokens.as_ref().unwrap_or(&default_max_tokens),
            temperature: request.temperature.as_ref().unwrap_or(&default_temperature),
        };
        debug!("Forwarding chat request to {} (model {})", self.completions_url, body.model);

        self.send(api_key, &body).await.map_err(|e| {
            error!("Upstream completion failed: {e}");
            GatewayError::Upstream(e)
        })
    }

    async fn send(&self, api_key: &str, body: &UpstreamRequest<'_>) -> Result<Value, reqwest::Error> {
        self.client
            .post(&self.completions_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}
