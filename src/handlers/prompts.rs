use serde_json::json;

use super::parse_params;
use crate::prompts::{self, PromptKind};
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode, McpErrorResponse,
    PromptGetParams, PromptMessage,
};

/// Handle `prompts/list`.
pub fn list(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(req.id.clone(), json!({ "prompts": prompts::descriptors() }))
}

/// Handle `prompts/get`.
pub fn get(req: &JsonRpcRequest) -> JsonRpcResponse {
    let params: PromptGetParams = match parse_params(req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let Some(kind) = PromptKind::from_name(&params.name) else {
        return JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::from(McpErrorResponse::new(
                McpErrorCode::UnknownPrompt,
                format!("Unknown prompt: {}", params.name),
            )),
        );
    };

    match kind.render(&params.arguments) {
        Ok(text) => JsonRpcResponse::success(
            req.id.clone(),
            json!({
                "description": kind.description(),
                "messages": [PromptMessage::user(text)]
            }),
        ),
        Err(e) => JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_params(e.to_string())),
    }
}
