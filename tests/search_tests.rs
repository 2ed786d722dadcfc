//! Documentation search: local keyword scan and the optional remote store.

mod common;

use std::fs;

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn local_search_finds_markdown_snippet() {
    let skills = common::skills_dir();
    let state = common::state(common::config(skills.path()));

    let (text, is_error) =
        common::call_tool(&state, "search_symbols_docs", json!({ "query": "routing guide" })).await;
    assert!(!is_error);

    let results: Value = serde_json::from_str(&text).unwrap();
    let files: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["file"].as_str().unwrap())
        .collect();
    assert_eq!(files, vec!["ROUTING.md"]);
    assert_eq!(
        results[0]["snippet"],
        "# Routing\n\nIntro text.\n\nThis is the routing guide for pages.\nMore detail."
    );
}

#[tokio::test]
async fn no_match_yields_message() {
    let skills = common::skills_dir();
    let state = common::state(common::config(skills.path()));

    let (text, is_error) =
        common::call_tool(&state, "search_symbols_docs", json!({ "query": "zzzqqq" })).await;
    assert!(!is_error);
    assert_eq!(text, "No results found for 'zzzqqq'. Try a different search term.");
}

#[tokio::test]
async fn max_results_caps_local_hits() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["a.md", "b.md", "c.md"] {
        fs::write(tmp.path().join(name), "Theme tokens live here.").unwrap();
    }
    let state = common::state(common::config(tmp.path()));

    let (text, _) = common::call_tool(
        &state,
        "search_symbols_docs",
        json!({ "query": "theme", "max_results": 2 }),
    )
    .await;
    let results: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn out_of_range_max_results_is_clamped() {
    let tmp = tempfile::tempdir().unwrap();
    for i in 0..7 {
        fs::write(tmp.path().join(format!("doc{i}.md")), "Theme tokens live here.").unwrap();
    }
    let state = common::state(common::config(tmp.path()));

    let (text, is_error) = common::call_tool(
        &state,
        "search_symbols_docs",
        json!({ "query": "theme", "max_results": 50 }),
    )
    .await;
    assert!(!is_error);
    let results: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn remote_results_come_first() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/match_documents"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .and(body_partial_json(json!({ "query_text": "routing guide", "match_count": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "Router", "content": "Use el.router()", "similarity": 0.91 },
            { "content": "untitled body" }
        ])))
        .expect(1)
        .mount(&store)
        .await;

    let skills = common::skills_dir();
    let state = common::state(common::config_with_vector_search(skills.path(), &store.uri()));

    let (text, _) =
        common::call_tool(&state, "search_symbols_docs", json!({ "query": "routing guide" })).await;
    let results: Value = serde_json::from_str(&text).unwrap();
    let results = results.as_array().unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["title"], "Router");
    assert_eq!(results[0]["similarity"], 0.91);
    assert_eq!(results[1]["title"], "Untitled");
    assert_eq!(results[1]["similarity"], 0.0);
    assert_eq!(results[2]["file"], "ROUTING.md");
}

#[tokio::test]
async fn remote_failure_falls_back_to_local() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/match_documents"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&store)
        .await;

    let skills = common::skills_dir();
    let state = common::state(common::config_with_vector_search(skills.path(), &store.uri()));

    let (text, is_error) =
        common::call_tool(&state, "search_symbols_docs", json!({ "query": "routing guide" })).await;
    assert!(!is_error);
    let results: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["file"], "ROUTING.md");
}
