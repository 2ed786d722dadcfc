use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Default upstream completions base URL.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model injected when a request does not name one.
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";

/// Default `HTTP-Referer` sent to the upstream API.
pub const DEFAULT_REFERER: &str = "https://github.com/baronsilver/symbols-mcp-server";

/// Default timeout for upstream completion calls (60 seconds).
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Timeout for discovering remote search credentials from the proxy.
const REMOTE_CONFIG_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("SYMBOLS_TRANSPORT must be \"stdio\" or \"http\", got {0:?}")]
    InvalidTransport(String),
    #[error("UPSTREAM_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// How the binary talks to its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// The axum HTTP surface (chat proxy, health, SSE handshake).
    Http,
}

/// Credentials for the optional remote vector search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSearchConfig {
    #[serde(rename = "supabase_url")]
    pub url: String,
    #[serde(rename = "supabase_key")]
    pub key: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub openrouter_api_key: Option<String>,
    pub upstream_base_url: String,
    pub referer: String,
    pub llm_model: String,
    pub proxy_url: Option<String>,
    pub vector_search: Option<VectorSearchConfig>,
    pub skills_dir: PathBuf,
    pub transport: Transport,
    pub http_addr: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// - `OPENROUTER_API_KEY` (optional): bearer credential for the upstream API
    /// - `OPENROUTER_BASE_URL` (optional): upstream base URL
    /// - `OPENROUTER_REFERER` (optional): `HTTP-Referer` header value
    /// - `LLM_MODEL` (optional, default `openai/gpt-4.1-mini`)
    /// - `SYMBOLS_MCP_URL` (optional): proxy used for completions instead of a local key
    /// - `SUPABASE_URL` / `SUPABASE_KEY` (optional): remote vector search
    /// - `SYMBOLS_SKILLS_DIR` (optional, default `./skills`)
    /// - `SYMBOLS_TRANSPORT` (optional): `stdio` or `http`
    /// - `HOST` / `PORT` (optional, default `0.0.0.0:8080`)
    /// - `UPSTREAM_TIMEOUT_SECS` (optional, default 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport = match var("SYMBOLS_TRANSPORT") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "stdio" => Transport::Stdio,
                "http" => Transport::Http,
                _ => return Err(ConfigError::InvalidTransport(raw)),
            },
            None if var("RAILWAY_ENVIRONMENT").as_deref() == Some("production") => Transport::Http,
            None => Transport::Stdio,
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let upstream_timeout_secs = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let vector_search = match (var("SUPABASE_URL"), var("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(VectorSearchConfig { url, key }),
            _ => None,
        };

        Ok(Self {
            openrouter_api_key: var("OPENROUTER_API_KEY"),
            upstream_base_url: trim_base(
                var("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            ),
            referer: var("OPENROUTER_REFERER").unwrap_or_else(|| DEFAULT_REFERER.to_string()),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            proxy_url: var("SYMBOLS_MCP_URL").map(trim_base),
            vector_search,
            skills_dir: var("SYMBOLS_SKILLS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("skills")),
            transport,
            http_addr: format!("{host}:{port}"),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }

    /// Fill in remote search credentials from the proxy's `/api/config`.
    ///
    /// Only runs when a proxy is configured and the credentials are not set
    /// locally. Every failure leaves the configuration untouched.
    pub async fn discover_remote_search(&mut self) {
        if self.vector_search.is_some() {
            return;
        }
        let Some(proxy) = self.proxy_url.as_deref() else {
            return;
        };

        let url = format!("{proxy}/api/config");
        let client = match reqwest::Client::builder().timeout(REMOTE_CONFIG_TIMEOUT).build() {
            Ok(c) => c,
            Err(e) => {
                warn!("Cannot build HTTP client for remote config: {e}");
                return;
            }
        };

        let response = match client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Remote config unavailable at {url}: {e}");
                return;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            debug!("Remote config at {url} returned status {}", response.status());
            return;
        }

        match response.json::<VectorSearchConfig>().await {
            Ok(remote) if !remote.url.is_empty() && !remote.key.is_empty() => {
                info!("Using remote search credentials from {proxy}");
                self.vector_search = Some(remote);
            }
            Ok(_) => debug!("Remote config at {url} has empty credentials"),
            Err(e) => debug!("Remote config at {url} is not valid JSON: {e}"),
        }
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
