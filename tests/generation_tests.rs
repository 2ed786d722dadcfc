//! Generation tools end to end: prompt assembly, the completion call and
//! post-processing of the model reply.

mod common;

use serde_json::{json, Value};
use symbols_mcp_server::config::ServerConfig;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upstream_replying(content: &str) -> MockServer {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::completion(content)))
        .mount(&upstream)
        .await;
    upstream
}

#[tokio::test]
async fn component_reply_is_unfenced() {
    let upstream = upstream_replying("```javascript\nexport const Card = { padding: 'A' }\n```").await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, is_error) = common::call_tool(
        &state,
        "generate_component",
        json!({ "description": "a card", "component_name": "Card" }),
    )
    .await;
    assert!(!is_error);
    assert_eq!(text, "export const Card = { padding: 'A' }");
}

#[tokio::test]
async fn component_prompt_carries_context_and_token_budget() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": 4000, "temperature": 0.7 })))
        .and(body_string_contains("Use extends, never extend."))
        .and(body_string_contains("PricingCard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::completion("ok")))
        .expect(1)
        .mount(&upstream)
        .await;

    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (_, is_error) = common::call_tool(
        &state,
        "generate_component",
        json!({ "description": "three pricing tiers", "component_name": "PricingCard" }),
    )
    .await;
    assert!(!is_error);
}

#[tokio::test]
async fn project_reply_is_pretty_printed_json() {
    let upstream = upstream_replying("```json\n{\"files\":{\"index.js\":\"export default {}\"}}\n```").await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, is_error) =
        common::call_tool(&state, "generate_project", json!({ "description": "a todo app" })).await;
    assert!(!is_error);

    let expected = serde_json::to_string_pretty(&json!({ "files": { "index.js": "export default {}" } }))
        .unwrap();
    assert_eq!(text, expected);
}

#[tokio::test]
async fn design_system_keeps_non_json_reply() {
    let upstream = upstream_replying("Here is a design system, sorry no JSON").await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, is_error) = common::call_tool(
        &state,
        "create_design_system",
        json!({ "description": "dark SaaS" }),
    )
    .await;
    assert!(!is_error);
    assert_eq!(text, "Here is a design system, sorry no JSON");
}

#[tokio::test]
async fn explain_returns_reply_verbatim() {
    let upstream = upstream_replying("```js\nstate: {}\n```").await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, _) =
        common::call_tool(&state, "explain_symbols_concept", json!({ "concept": "state" })).await;
    assert_eq!(text, "```js\nstate: {}\n```");
}

#[tokio::test]
async fn upstream_error_becomes_tool_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&upstream)
        .await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, is_error) =
        common::call_tool(&state, "review_symbols_code", json!({ "code": "export default {}" })).await;
    assert!(is_error);
    let err: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(err["error"]["code"], "upstream_error");
}

#[tokio::test]
async fn reply_without_choices_is_upstream_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&upstream)
        .await;
    let skills = common::skills_dir();
    let state = common::state(common::config_with_upstream(skills.path(), &upstream.uri()));

    let (text, is_error) =
        common::call_tool(&state, "convert_to_symbols", json!({ "code": "<div/>" })).await;
    assert!(is_error);
    assert!(text.contains("upstream_error"));
}

#[tokio::test]
async fn proxy_is_preferred_over_local_credential() {
    let proxy = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({ "max_tokens": 12000 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::completion("converted")))
        .expect(1)
        .mount(&proxy)
        .await;

    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let skills = common::skills_dir();
    let config = ServerConfig {
        proxy_url: Some(proxy.uri()),
        ..common::config_with_upstream(skills.path(), &upstream.uri())
    };
    let state = common::state(config);

    let (text, is_error) =
        common::call_tool(&state, "convert_to_symbols", json!({ "code": "<div/>" })).await;
    assert!(!is_error);
    assert_eq!(text, "converted");
}
