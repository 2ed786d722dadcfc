use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID, either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceReadParams {
    pub uri: String,
}

/// Parameters for `prompts/get`. MCP prompt arguments are always strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptGetParams {
    pub name: String,
    #[serde(default)]
    pub arguments: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Tool arguments
// ---------------------------------------------------------------------------

fn default_component_name() -> String {
    "GeneratedComponent".into()
}

fn default_page_name() -> String {
    "main".into()
}

fn default_route() -> String {
    "/".into()
}

fn default_project_name() -> String {
    "my-symbols-app".into()
}

fn default_source_framework() -> String {
    "auto".into()
}

fn default_max_results() -> i64 {
    3
}

fn default_true() -> bool {
    true
}

/// Arguments for `generate_component`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateComponentParams {
    pub description: String,
    #[serde(default = "default_component_name")]
    pub component_name: String,
    #[serde(default)]
    pub interactive: bool,
}

/// Arguments for `generate_page`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePageParams {
    pub description: String,
    #[serde(default = "default_page_name")]
    pub page_name: String,
    #[serde(default = "default_route")]
    pub route: String,
}

/// Arguments for `generate_project`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateProjectParams {
    pub description: String,
    #[serde(default = "default_project_name")]
    pub project_name: String,
}

/// Arguments for `convert_to_symbols`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertParams {
    pub code: String,
    #[serde(default = "default_source_framework")]
    pub source_framework: String,
}

/// Arguments for `search_symbols_docs`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDocsParams {
    pub query: String,
    /// Accepts i64 so out-of-range values can be clamped rather than rejected by serde.
    #[serde(default = "default_max_results")]
    pub max_results: i64,
}

/// Arguments for `explain_symbols_concept`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainConceptParams {
    pub concept: String,
}

/// Arguments for `review_symbols_code`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCodeParams {
    pub code: String,
}

/// Arguments for `create_design_system`.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignSystemParams {
    pub description: String,
    #[serde(default = "default_true")]
    pub include_theme: bool,
    #[serde(default = "default_true")]
    pub include_icons: bool,
}
