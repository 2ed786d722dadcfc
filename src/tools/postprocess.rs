/// Leading fence markers, most specific first.
const FENCE_PREFIXES: [&str; 4] = ["```javascript", "```js", "```json", "```"];
const FENCE: &str = "```";

/// Strip one leading and one trailing markdown code fence.
pub fn clean_code_response(text: &str) -> String {
    let mut cleaned = text.trim();
    if let Some(prefix) = FENCE_PREFIXES.iter().find(|p| cleaned.starts_with(**p)) {
        cleaned = &cleaned[prefix.len()..];
    }
    if let Some(stripped) = cleaned.strip_suffix(FENCE) {
        cleaned = stripped;
    }
    cleaned.trim().to_string()
}

/// Re-serialize JSON with two-space indentation, or return the input unchanged.
pub fn pretty_json_or_raw(text: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(text),
        Err(_) => text,
    }
}
