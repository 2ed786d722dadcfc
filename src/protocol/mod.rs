pub mod request;
pub mod response;

pub use request::{
    ConvertParams, DesignSystemParams, ExplainConceptParams, GenerateComponentParams,
    GeneratePageParams, GenerateProjectParams, InitializeParams, JsonRpcRequest, PromptGetParams,
    ResourceReadParams, ReviewCodeParams, RpcId, SearchDocsParams, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse, PromptArgument,
    PromptDescriptor, PromptMessage, ResourceContents, ResourceDescriptor, ToolDefinition,
    ToolResult, ToolResultContent,
};
