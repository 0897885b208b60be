//! Recovery of the JSON object from raw completion text.
//!
//! Models do not always honor "respond only with JSON"; they prepend
//! explanations or wrap the object in code fences. The span from the first
//! `{` to the last `}` is taken as the candidate document. Prose that itself
//! contains braces can shift that span, in which case parsing fails with
//! `MalformedResponse` rather than returning a wrong object.

use serde_json::Value;

use crate::error::{Result, WaypointError};

/// Returns the slice between the first `{` and the last `}` (inclusive).
///
/// `None` when there is no `{`, no `}`, or the last `}` precedes the first `{`.
pub fn extract_json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

/// Extracts and parses the candidate JSON document from completion text.
pub fn parse_completion(content: &str) -> Result<Value> {
    let span = extract_json_span(content.trim()).ok_or_else(|| {
        WaypointError::malformed("Failed to parse AI response: no JSON object found")
    })?;

    serde_json::from_str(span)
        .map_err(|err| WaypointError::malformed(format!("Failed to parse AI response: {err}")))
}
