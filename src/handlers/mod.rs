pub mod prompts;
pub mod resources;
pub mod tools;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::info;

use crate::app_state::AppState;
use crate::protocol::{InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "Symbols AI Assistant";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, state: &AppState) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => Some(initialize(req, state)),

        "notifications/initialized" => None,
        m if m.starts_with("notifications/") && req.id.is_none() => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), json!({}))),

        "tools/list" => Some(tools::list(req)),
        "tools/call" => Some(tools::call(req, state).await),

        "resources/list" => Some(resources::list(req)),
        "resources/read" => Some(resources::read(req, state)),

        "prompts/list" => Some(prompts::list(req)),
        "prompts/get" => Some(prompts::get(req)),

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

fn initialize(req: &JsonRpcRequest, state: &AppState) -> JsonRpcResponse {
    if let Some(params) = req
        .params
        .clone()
        .and_then(|v| serde_json::from_value::<InitializeParams>(v).ok())
    {
        let client = params.client_info.as_ref();
        info!(
            "Client connected: {} {} (protocol {})",
            client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
            client.and_then(|c| c.version.as_deref()).unwrap_or("-"),
            params.protocol_version.as_deref().unwrap_or("unspecified"),
        );
    }

    let result = json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": state.skills.agent_instructions()
    });
    JsonRpcResponse::success(req.id.clone(), result)
}

/// Deserialize required `params`, or build the invalid-params response.
fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, JsonRpcResponse> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_params(format!("Invalid {} params: {e}", req.method)),
            )
        }),
        None => Err(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::invalid_params(format!("Missing params for {}", req.method)),
        )),
    }
}
