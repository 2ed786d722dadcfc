//! Stdio transport: framing, parse errors and the initialization gate.

mod common;

use serde_json::Value;
use symbols_mcp_server::server::McpServer;

async fn run_lines(input: &str) -> Vec<Value> {
    let skills = common::skills_dir();
    let mut server = McpServer::new(common::state(common::config(skills.path())));
    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#;

#[tokio::test]
async fn requests_before_initialize_are_rejected() {
    let input = [
        r#"{"jsonrpc":"2.0","method":"notifications/progress"}"#,
        r#"{"jsonrpc":"2.0","id":5,"method":"tools/list"}"#,
    ]
    .join("\n");

    let responses = run_lines(&input).await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 5);
    assert_eq!(responses[0]["error"]["code"], -32600);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Server not initialized"));
}

#[tokio::test]
async fn handshake_then_tools_list() {
    let input = [
        INITIALIZE,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "",
        r#"{"jsonrpc":"2.0","id":"two","method":"tools/list"}"#,
    ]
    .join("\n");

    let responses = run_lines(&input).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(responses[1]["id"], "two");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn malformed_json_is_parse_error_and_loop_continues() {
    let input = [INITIALIZE, "{ not json", r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#].join("\n");

    let responses = run_lines(&input).await;
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[1]["error"]["code"], -32700);
    assert!(responses[1].get("id").is_none());
    assert_eq!(responses[2]["id"], 2);
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_invalid_request() {
    let input = [INITIALIZE, r#"{"jsonrpc":"1.0","id":3,"method":"ping"}"#].join("\n");

    let responses = run_lines(&input).await;
    assert_eq!(responses[1]["id"], 3);
    assert_eq!(responses[1]["error"]["code"], -32600);
}

#[tokio::test]
async fn oversized_message_is_parse_error() {
    let big = format!(
        r#"{{"jsonrpc":"2.0","id":4,"method":"ping","params":{{"pad":"{}"}}}}"#,
        "x".repeat(1024 * 1024)
    );
    let input = [INITIALIZE, big.as_str()].join("\n");

    let responses = run_lines(&input).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1]["error"]["code"], -32700);
}
