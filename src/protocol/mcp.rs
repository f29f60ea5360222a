//! Tool protocol types (MCP-style tool listing and invocation)

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::types::{ExplorerError, ExplorerResult};

/// Protocol revision reported during the handshake
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Tool definition as listed by `tools/list`
#[derive(Serialize, Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Server information for the handshake
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new(crate::NAME, crate::VERSION)
    }
}

/// Trait for tools
///
/// All tools must implement this trait to be registered with the server.
pub trait Tool: Send + Sync {
    /// Get the tool definition for tools/list
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given arguments
    fn execute(&self, params: Value) -> ExplorerResult<Value>;

    /// Get the tool name (convenience method)
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Deserialize one optional argument, `None` when absent or null
pub fn optional_arg<T: DeserializeOwned>(params: &Value, key: &str) -> ExplorerResult<Option<T>> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| ExplorerError::InvalidParams(format!("'{}': {}", key, e))),
    }
}

/// Deserialize one required argument
pub fn required_arg<T: DeserializeOwned>(params: &Value, key: &str) -> ExplorerResult<T> {
    optional_arg(params, key)?
        .ok_or_else(|| ExplorerError::InvalidParams(format!("missing '{}'", key)))
}
