//! Helpers shared by the server loop and the tools

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::types::ExplorerResult;

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Build a text content response
pub fn text_response(text: impl Into<String>) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text.into()
        }]
    })
}

/// Build a text content response holding pretty-printed JSON
pub fn json_response<T: Serialize>(value: &T) -> ExplorerResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}

/// Build an error content response (a handled failure, not a protocol error)
pub fn error_response(message: impl std::fmt::Display) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}
