use serde::Deserialize;
use serde_json::Value;

use super::PipelineError;

/// Parse a JSON value out of an extraction-service reply, tolerating an
/// optional Markdown code fence with or without a `json` language tag.
pub fn parse_json_response(raw: &str) -> Result<Value, PipelineError> {
    let mut body = raw;
    if body.starts_with("```") {
        body = body.split("```").nth(1).unwrap_or(body);
        body = body.strip_prefix("json").unwrap_or(body);
    }
    serde_json::from_str(body.trim())
        .map_err(|e| PipelineError::MalformedResponse(e.to_string()))
}

/// Decode an array leniently — items that fail to deserialize are skipped.
pub fn parse_array_lenient<T: for<'de> Deserialize<'de>>(items: Option<&[Value]>) -> Vec<T> {
    match items {
        None => vec![],
        Some(arr) => arr
            .iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect(),
    }
}
