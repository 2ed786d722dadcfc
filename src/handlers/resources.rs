use serde_json::json;

use super::parse_params;
use crate::app_state::AppState;
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode, McpErrorResponse,
    ResourceDescriptor, ResourceReadParams,
};
use crate::resources::{self, RESOURCES};

/// Handle `resources/list`.
pub fn list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let entries: Vec<ResourceDescriptor> = RESOURCES.iter().map(|r| r.descriptor()).collect();
    JsonRpcResponse::success(req.id.clone(), json!({ "resources": entries }))
}

/// Handle `resources/read`.
pub fn read(req: &JsonRpcRequest, state: &AppState) -> JsonRpcResponse {
    let params: ResourceReadParams = match parse_params(req) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match resources::find(&params.uri) {
        Some(resource) => {
            let contents = resource.read(&state.skills);
            JsonRpcResponse::success(req.id.clone(), json!({ "contents": [contents] }))
        }
        None => JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::from(McpErrorResponse::new(
                McpErrorCode::UnknownResource,
                format!("Unknown resource: {}", params.uri),
            )),
        ),
    }
}
