//! Locating JSON inside arbitrary model text.
//!
//! Models asked for "JSON only" still wrap output in prose or code fences
//! often enough that the pipeline cannot assume anything about the payload.
//! This is a best-effort locator; it does not verify well-formedness. The
//! parser downstream is the arbiter.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").unwrap());

/// Return the substring most likely to be a single JSON value.
///
/// Tried in order: the trimmed text itself if it already starts with `{` or
/// `[`; the content of the first code fence if that does; otherwise the span
/// from the earliest `{`/`[` through the latest `}`/`]`.
pub fn extract_first_json(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(trimmed);
    }

    if let Some(caps) = FENCE_RE.captures(trimmed) {
        let inner = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if inner.starts_with('{') || inner.starts_with('[') {
            return Some(inner);
        }
    }

    let start = match (trimmed.find('{'), trimmed.find('[')) {
        (None, None) => return None,
        (Some(brace), None) => brace,
        (None, Some(bracket)) => bracket,
        (Some(brace), Some(bracket)) => brace.min(bracket),
    };

    let candidate = &trimmed[start..];
    let end = match (candidate.rfind('}'), candidate.rfind(']')) {
        (None, None) => return None,
        (Some(brace), None) => brace,
        (None, Some(bracket)) => bracket,
        (Some(brace), Some(bracket)) => brace.max(bracket),
    };

    Some(candidate[..=end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object_passes_through() {
        assert_eq!(extract_first_json(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_bare_array_passes_through() {
        assert_eq!(extract_first_json("  [1, 2]  "), Some("[1, 2]"));
    }

    #[test]
    fn test_fenced_block_with_tag() {
        let text = "Here you go:\n```json\n{\"a\": 1}\n```\nEnjoy!";
        assert_eq!(extract_first_json(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_fenced_block_without_tag() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_first_json(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_prose_wrapped_object() {
        let embedded = r#"{"title": "Plan", "days": []}"#;
        let text = format!("Sure! The itinerary is {} and that's it.", embedded);
        let extracted = extract_first_json(&text).unwrap();
        assert_eq!(extracted, embedded);
        // The extracted span must re-parse to the embedded value.
        let value: serde_json::Value = serde_json::from_str(extracted).unwrap();
        assert_eq!(value["title"], "Plan");
    }

    #[test]
    fn test_earliest_opener_wins() {
        let text = "noise [1, 2] more {\"a\": 1}";
        // '[' comes first, last closer is '}'.
        assert_eq!(extract_first_json(text), Some("[1, 2] more {\"a\": 1}"));
    }

    #[test]
    fn test_no_json_found() {
        assert_eq!(extract_first_json("I could not produce a plan."), None);
    }

    #[test]
    fn test_opener_without_closer() {
        assert_eq!(extract_first_json("prefix { unterminated"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_first_json(""), None);
        assert_eq!(extract_first_json("   \n\t "), None);
    }

    #[test]
    fn test_fence_with_prose_inside_falls_back() {
        // Fenced content that is not JSON falls through to the scan, which
        // still finds the object after the fence.
        let text = "```\nnot json\n```\nresult: {\"a\": 1}";
        assert_eq!(extract_first_json(text), Some(r#"{"a": 1}"#));
    }
}
