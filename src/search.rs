//! Documentation lookup: keyword scan over the skills directory, optionally
//! augmented by a remote vector search.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::config::VectorSearchConfig;

pub const DEFAULT_MAX_RESULTS: usize = 3;
pub const MAX_RESULTS_LIMIT: usize = 5;

/// Lines kept above the first matching line.
const LINES_BEFORE: usize = 2;
/// Lines kept from the first matching line onwards.
const LINES_AFTER: usize = 20;

/// Characters of remote document content kept per result.
const REMOTE_CONTENT_CHARS: usize = 1000;

const REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// A single documentation hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Local { file: String, snippet: String },
    Remote { title: String, content: String, similarity: f64 },
}

/// Clamp a caller-supplied result count into `1..=MAX_RESULTS_LIMIT`.
pub fn clamp_max_results(requested: i64) -> usize {
    requested.clamp(1, MAX_RESULTS_LIMIT as i64) as usize
}

/// Lowercase whitespace-separated tokens longer than two characters.
///
/// Falls back to the whole lowercase query when no token survives.
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let tokens: Vec<String> = lowered
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        vec![lowered]
    } else {
        tokens
    }
}

/// Scan `*.md` files in `dir` and return a snippet for each matching file.
///
/// Results follow directory iteration order and stop at `max_results`.
/// An unreadable directory yields no results.
pub fn search_local(dir: &Path, query: &str, max_results: usize) -> Vec<SearchResult> {
    let keywords = tokenize(query);
    let mut results = Vec::new();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read skills directory {}: {e}", dir.display());
            return results;
        }
    };

    for entry in entries.flatten() {
        if results.len() >= max_results {
            break;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") || !path.is_file() {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping unreadable document {}: {e}", path.display());
                continue;
            }
        };

        if let Some(snippet) = snippet_around_first_match(&content, &keywords) {
            results.push(SearchResult::Local {
                file: entry.file_name().to_string_lossy().to_string(),
                snippet,
            });
        }
    }

    results
}

/// Window of lines around the first line containing any keyword.
fn snippet_around_first_match(content: &str, keywords: &[String]) -> Option<String> {
    let content_lower = content.to_lowercase();
    if !keywords.iter().any(|kw| content_lower.contains(kw.as_str())) {
        return None;
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let hit = lines.iter().position(|line| {
        let line_lower = line.to_lowercase();
        keywords.iter().any(|kw| line_lower.contains(kw.as_str()))
    })?;

    let start = hit.saturating_sub(LINES_BEFORE);
    let end = (hit + LINES_AFTER).min(lines.len());
    Some(lines[start..end].join("\n"))
}

// ---------------------------------------------------------------------------
// Remote vector search
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("vector search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("vector search returned status {0}")]
    Status(u16),
}

/// Result of asking the remote vector store.
#[derive(Debug)]
pub enum RemoteOutcome {
    /// No remote search is configured.
    Unavailable,
    /// The remote call failed; local results stand alone.
    Failed(SearchError),
    Found(Vec<SearchResult>),
}

#[derive(Debug, Deserialize)]
struct RemoteDocument {
    title: Option<String>,
    content: Option<String>,
    similarity: Option<f64>,
}

impl From<RemoteDocument> for SearchResult {
    fn from(doc: RemoteDocument) -> Self {
        SearchResult::Remote {
            title: doc.title.unwrap_or_else(|| "Untitled".to_string()),
            content: doc
                .content
                .unwrap_or_default()
                .chars()
                .take(REMOTE_CONTENT_CHARS)
                .collect(),
            similarity: doc.similarity.unwrap_or(0.0),
        }
    }
}

/// Client for the `match_documents` RPC of the remote vector store.
#[derive(Debug, Clone)]
pub struct RemoteSearch {
    client: reqwest::Client,
    config: Option<VectorSearchConfig>,
}

impl RemoteSearch {
    pub fn new(config: Option<VectorSearchConfig>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REMOTE_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub async fn query(&self, text: &str, max_results: usize) -> RemoteOutcome {
        let Some(config) = &self.config else {
            return RemoteOutcome::Unavailable;
        };

        match self.fetch(config, text, max_results).await {
            Ok(docs) => RemoteOutcome::Found(
                docs.into_iter()
                    .take(max_results)
                    .map(SearchResult::from)
                    .collect(),
            ),
            Err(e) => RemoteOutcome::Failed(e),
        }
    }

    async fn fetch(
        &self,
        config: &VectorSearchConfig,
        text: &str,
        max_results: usize,
    ) -> Result<Vec<RemoteDocument>, SearchError> {
        let url = format!("{}/rest/v1/rpc/match_documents", config.url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .header("apikey", &config.key)
            .bearer_auth(&config.key)
            .json(&json!({ "query_text": text, "match_count": max_results }))
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Remote results first, then local ones, capped at `max_results`.
pub fn merge(remote: RemoteOutcome, local: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    let mut merged = match remote {
        RemoteOutcome::Found(found) => found,
        RemoteOutcome::Failed(e) => {
            warn!("Remote search failed, using local results only: {e}");
            Vec::new()
        }
        RemoteOutcome::Unavailable => Vec::new(),
    };
    merged.extend(local);
    merged.truncate(max_results);
    merged
}

/// Full lookup: local scan on a blocking thread plus the remote query.
pub async fn search_docs(
    skills_dir: &Path,
    remote: &RemoteSearch,
    query: &str,
    max_results: usize,
) -> Vec<SearchResult> {
    let dir = skills_dir.to_path_buf();
    let owned_query = query.to_string();
    let local_task =
        tokio::task::spawn_blocking(move || search_local(&dir, &owned_query, max_results));

    let remote_outcome = remote.query(query, max_results).await;

    let local = match local_task.await {
        Ok(results) => results,
        Err(e) => {
            warn!("Local search task failed: {e}");
            Vec::new()
        }
    };

    merge(remote_outcome, local, max_results)
}

/// Render results the way `search_symbols_docs` returns them.
pub fn render(results: &[SearchResult], query: &str) -> String {
    if results.is_empty() {
        return format!("No results found for '{query}'. Try a different search term.");
    }
    serde_json::to_string_pretty(results)
        .unwrap_or_else(|e| format!("Failed to render search results: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_short_words() {
        assert_eq!(tokenize("How do I use Routing"), vec!["how", "use", "routing"]);
    }

    #[test]
    fn tokenize_falls_back_to_whole_query() {
        assert_eq!(tokenize("UI of"), vec!["ui of"]);
    }

    #[test]
    fn clamp_bounds_result_count() {
        assert_eq!(clamp_max_results(0), 1);
        assert_eq!(clamp_max_results(-4), 1);
        assert_eq!(clamp_max_results(3), 3);
        assert_eq!(clamp_max_results(50), 5);
    }

    #[test]
    fn snippet_window_is_two_before_twenty_after() {
        let content: String = (0..40)
            .map(|i| if i == 10 { "the router line".to_string() } else { format!("line {i}") })
            .collect::<Vec<_>>()
            .join("\n");

        let snippet = snippet_around_first_match(&content, &["router".to_string()]).unwrap();
        let lines: Vec<&str> = snippet.split('\n').collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "line 8");
        assert_eq!(lines[2], "the router line");
        assert_eq!(lines[21], "line 29");
    }

    #[test]
    fn snippet_window_clamps_at_document_edges() {
        let snippet =
            snippet_around_first_match("Routing\nsecond", &["routing".to_string()]).unwrap();
        assert_eq!(snippet, "Routing\nsecond");
    }

    #[test]
    fn merge_puts_remote_first_and_truncates() {
        let remote = RemoteOutcome::Found(vec![SearchResult::Remote {
            title: "Remote".into(),
            content: "r".into(),
            similarity: 0.9,
        }]);
        let local = vec![
            SearchResult::Local { file: "a.md".into(), snippet: "a".into() },
            SearchResult::Local { file: "b.md".into(), snippet: "b".into() },
        ];

        let merged = merge(remote, local, 2);
        assert_eq!(merged.len(), 2);
        assert!(matches!(merged[0], SearchResult::Remote { .. }));
        assert_eq!(merged[1], SearchResult::Local { file: "a.md".into(), snippet: "a".into() });
    }

    #[test]
    fn merge_ignores_failed_remote() {
        let local = vec![SearchResult::Local { file: "a.md".into(), snippet: "a".into() }];
        let merged = merge(RemoteOutcome::Failed(SearchError::Status(503)), local.clone(), 3);
        assert_eq!(merged, local);
    }

    #[test]
    fn remote_content_is_truncated() {
        let doc = RemoteDocument {
            title: None,
            content: Some("x".repeat(1500)),
            similarity: None,
        };
        match SearchResult::from(doc) {
            SearchResult::Remote { title, content, similarity } => {
                assert_eq!(title, "Untitled");
                assert_eq!(content.len(), 1000);
                assert_eq!(similarity, 0.0);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn render_reports_empty_results() {
        assert_eq!(
            render(&[], "nothing"),
            "No results found for 'nothing'. Try a different search term."
        );
    }
}
