use jsonschema::validator_for;
use serde_json::Value;

use symbols_mcp_server::protocol::{McpErrorCode, McpErrorResponse};

#[test]
fn golden_mcp_error_schema_validation() {
    // 1. Build a canonical error response
    let response = McpErrorResponse::new(
        McpErrorCode::UnknownTool,
        "Unknown tool: generate_widget",
    );

    let json_str = serde_json::to_string_pretty(&response).unwrap();
    let json_value: Value = serde_json::from_str(&json_str).unwrap();

    // 2. Schema (v0), frozen
    let schema_str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "https://symbols.app/schemas/mcp/error-v0.json",
  "title": "MCP Error Response v0",
  "type": "object",
  "required": ["error"],
  "additionalProperties": false,
  "properties": {
    "error": {
      "type": "object",
      "required": ["code", "message"],
      "additionalProperties": false,
      "properties": {
        "code": {
          "type": "string",
          "enum": [
            "invalid_arguments",
            "unknown_tool",
            "unknown_resource",
            "unknown_prompt",
            "upstream_error",
            "configuration_error",
            "internal_error"
          ]
        },
        "message": {
          "type": "string",
          "minLength": 1
        }
      }
    }
  }
}"#;

    let schema_json: Value = serde_json::from_str(schema_str).unwrap();
    let validator = validator_for(&schema_json).unwrap();

    // 3. Validate against schema
    assert!(validator.is_valid(&json_value), "MCP error JSON must satisfy v0 schema");

    // 4. Golden snapshot (byte-identical, stable)
    let expected = r#"{
  "error": {
    "code": "unknown_tool",
    "message": "Unknown tool: generate_widget"
  }
}"#;

    assert_eq!(json_str.trim(), expected.trim(), "MCP error JSON snapshot mismatch");
}

#[test]
fn every_canonical_error_satisfies_schema() {
    let schema: Value = serde_json::json!({
        "type": "object",
        "required": ["error"],
        "properties": {
            "error": {
                "type": "object",
                "required": ["code", "message"],
                "properties": {
                    "code": { "type": "string" },
                    "message": { "type": "string", "minLength": 1 }
                }
            }
        }
    });
    let validator = validator_for(&schema).unwrap();

    for code in [
        McpErrorCode::InvalidArguments,
        McpErrorCode::UnknownTool,
        McpErrorCode::UnknownResource,
        McpErrorCode::UnknownPrompt,
        McpErrorCode::UpstreamError,
        McpErrorCode::ConfigurationError,
        McpErrorCode::InternalError,
    ] {
        let value = serde_json::to_value(McpErrorResponse::canonical(code.clone())).unwrap();
        assert!(validator.is_valid(&value), "{code:?} must satisfy the error schema");
    }
}

#[test]
fn error_codes_map_to_json_rpc_classes() {
    assert_eq!(McpErrorCode::InvalidArguments.json_rpc_code(), -32602);
    assert_eq!(McpErrorCode::UnknownResource.json_rpc_code(), -32602);
    assert_eq!(McpErrorCode::UpstreamError.json_rpc_code(), -32603);
    assert_eq!(McpErrorCode::ConfigurationError.json_rpc_code(), -32603);
}
