//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde_json::{json, Value};
use symbols_mcp_server::app_state::AppState;
use symbols_mcp_server::config::{ServerConfig, Transport, VectorSearchConfig};
use symbols_mcp_server::handlers;
use symbols_mcp_server::http;
use symbols_mcp_server::protocol::JsonRpcRequest;
use tempfile::TempDir;

pub const AGENT_RULES: &str = "# Rules\nAlways use extends and childExtends.";

/// A skills directory with the context files, agent instructions and two
/// searchable documents.
pub fn skills_dir() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("CLAUDE.md"), "# DOMQL v3\nUse extends, never extend.").unwrap();
    fs::write(root.join("SYMBOLS_LOCAL_INSTRUCTIONS.md"), "# Structure\nsmbls/ is flat.").unwrap();
    fs::write(root.join("DESIGN_DIRECTION.md"), "# Design\nConfident typography.").unwrap();
    fs::write(root.join("AGENT_INSTRUCTIONS.md"), AGENT_RULES).unwrap();
    fs::write(
        root.join("ROUTING.md"),
        "# Routing\n\nIntro text.\n\nThis is the routing guide for pages.\nMore detail.",
    )
    .unwrap();
    fs::write(root.join("notes.txt"), "routing guide in a non-markdown file").unwrap();
    tmp
}

/// Configuration with no credentials and no proxy.
pub fn config(skills: &Path) -> ServerConfig {
    ServerConfig {
        openrouter_api_key: None,
        upstream_base_url: "http://127.0.0.1:9".to_string(),
        referer: "https://example.test/symbols".to_string(),
        llm_model: "openai/gpt-4.1-mini".to_string(),
        proxy_url: None,
        vector_search: None,
        skills_dir: skills.to_path_buf(),
        transport: Transport::Stdio,
        http_addr: "127.0.0.1:0".to_string(),
        upstream_timeout: Duration::from_secs(5),
    }
}

/// Configuration whose upstream API is `base_url` with a bearer credential.
pub fn config_with_upstream(skills: &Path, base_url: &str) -> ServerConfig {
    ServerConfig {
        openrouter_api_key: Some("test-key".to_string()),
        upstream_base_url: base_url.to_string(),
        ..config(skills)
    }
}

pub fn config_with_vector_search(skills: &Path, url: &str) -> ServerConfig {
    ServerConfig {
        vector_search: Some(VectorSearchConfig {
            url: url.to_string(),
            key: "anon-key".to_string(),
        }),
        ..config(skills)
    }
}

pub fn state(config: ServerConfig) -> AppState {
    AppState::new(config).unwrap()
}

pub fn request(id: i64, method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    }))
    .unwrap()
}

/// Dispatch and return the serialized response.
pub async fn call(state: &AppState, method: &str, params: Value) -> Value {
    let req = request(1, method, params);
    let resp = handlers::dispatch(&req, state)
        .await
        .expect("request must produce a response");
    serde_json::to_value(resp).unwrap()
}

/// Call a tool and return `(text, is_error)`.
pub async fn call_tool(state: &AppState, name: &str, arguments: Value) -> (String, bool) {
    let resp = call(state, "tools/call", json!({ "name": name, "arguments": arguments })).await;
    let result = &resp["result"];
    let text = result["content"][0]["text"].as_str().unwrap().to_string();
    let is_error = result["isError"].as_bool().unwrap_or(false);
    (text, is_error)
}

/// Serve the HTTP router on an ephemeral port.
pub async fn spawn_http(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::router(state)).await.unwrap();
    });
    addr
}

/// A chat-completions reply carrying `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "gen-1",
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}
