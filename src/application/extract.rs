//! Response extraction - recovers a JSON object from the model's raw reply.
//!
//! The model is instructed to emit only JSON but may wrap it in commentary
//! or sprinkle formatting artifacts. This stage takes the widest brace span
//! and applies a best-effort cleanup before a strict `serde_json` parse. It
//! is deliberately not a lenient JSON parser: anything the cleanup cannot
//! repair is a hard failure for the attempt.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// Trailing "// ..." fragments up to the next comma; the model sometimes
// annotates fields despite the instructions.
static INLINE_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^,]*").expect("valid regex"));

/// Why extraction failed for this attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("No JSON found in response")]
    NoJsonFound,

    #[error("Invalid JSON response from API")]
    InvalidJson(String),
}

/// Locates and parses the JSON object embedded in a raw reply.
///
/// The span runs from the first `{` to the last `}` (greedy, covering any
/// nested objects). Absence of such a span is `NoJsonFound`; a span that
/// still fails strict parsing after cleanup is `InvalidJson`.
pub fn extract_json(raw: &str) -> Result<serde_json::Value, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = raw.rfind('}').ok_or(ExtractError::NoJsonFound)?;
    if end < start {
        return Err(ExtractError::NoJsonFound);
    }

    let cleaned = cleanup(&raw[start..=end]);

    serde_json::from_str(&cleaned).map_err(|e| ExtractError::InvalidJson(e.to_string()))
}

/// Best-effort repair of common model formatting deviations.
fn cleanup(span: &str) -> String {
    let without_escaped_newlines = span.replace("\\n", "");
    let collapsed = WHITESPACE_RUNS.replace_all(&without_escaped_newlines, " ");
    INLINE_COMMENTS.replace_all(&collapsed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_object() {
        let value = extract_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn strips_surrounding_commentary() {
        let raw = r#"Sure! Here you go: {"scores": {"passion": 75}} Hope that helps!"#;
        let value = extract_json(raw).unwrap();
        assert_eq!(value["scores"]["passion"], 75);
    }

    #[test]
    fn span_is_greedy_across_nested_objects() {
        let raw = r#"prefix {"outer": {"inner": 2}} suffix"#;
        let value = extract_json(raw).unwrap();
        assert_eq!(value["outer"]["inner"], 2);
    }

    #[test]
    fn no_braces_is_no_json_found() {
        assert_eq!(
            extract_json("I cannot help with that."),
            Err(ExtractError::NoJsonFound)
        );
    }

    #[test]
    fn reversed_braces_are_no_json_found() {
        assert_eq!(extract_json("} nothing {"), Err(ExtractError::NoJsonFound));
    }

    #[test]
    fn unparseable_span_is_invalid_json() {
        let result = extract_json(r#"{"a": }"#);
        assert!(matches!(result, Err(ExtractError::InvalidJson(_))));
    }

    #[test]
    fn cleanup_drops_escaped_newline_pairs() {
        let raw = "{\"a\": \"line\\none\"}";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["a"], "lineone");
    }

    #[test]
    fn cleanup_collapses_whitespace_runs() {
        let raw = "{\"a\":    1,\n\n   \"b\":\t2}";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
    }

    #[test]
    fn cleanup_strips_trailing_comment_fragments() {
        let raw = r#"{"a": 1 // the passion score, "b": 2}"#;
        let value = extract_json(raw).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
    }
}
