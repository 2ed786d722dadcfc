use serde_json::json;
use tracing::{error, info, warn};

use super::parse_params;
use crate::app_state::AppState;
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode, McpErrorResponse, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::tools::{self, ToolKind};

/// Handle `tools/list`.
pub fn list(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(req.id.clone(), json!({ "tools": tools::definitions() }))
}

/// Handle `tools/call`. Tool failures are reported inside a successful
/// response as `isError: true`; only malformed params are JSON-RPC errors.
pub async fn call(req: &JsonRpcRequest, state: &AppState) -> JsonRpcResponse {
    let params: ToolCallParams = match parse_params(req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let tool_result = call_tool(&params, state).await;
    match serde_json::to_value(&tool_result) {
        Ok(result_json) => JsonRpcResponse::success(req.id.clone(), result_json),
        Err(e) => {
            error!("Cannot serialize result of {}: {e}", params.name);
            JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::from(McpErrorResponse::canonical(McpErrorCode::InternalError)),
            )
        }
    }
}

/// Validate arguments against the tool's schema, then run it.
pub async fn call_tool(params: &ToolCallParams, state: &AppState) -> ToolResult {
    let Some(kind) = ToolKind::from_name(&params.name) else {
        return McpErrorResponse::new(
            McpErrorCode::UnknownTool,
            format!("Unknown tool: {}", params.name),
        )
        .into();
    };

    let arguments = params.arguments.clone().unwrap_or_else(|| json!({}));
    if let Err(e) = schema::validate_value(&kind.input_schema(), &arguments) {
        return McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Invalid arguments for {}: {e}", kind.name()),
        )
        .into();
    }

    info!("Calling tool {}", kind.name());
    match kind.call(arguments, state).await {
        Ok(text) => ToolResult::text(text),
        Err(e) => {
            warn!("Tool {} failed: {e}", kind.name());
            McpErrorResponse::from(e).into()
        }
    }
}
