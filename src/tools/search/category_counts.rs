//! Category counts tool

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::event_store::EventStore;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_response;
use crate::types::{Category, ExplorerResult};

/// Tool reporting how many events each category tab would show
pub struct CategoryCountsTool {
    store: Arc<EventStore>,
}

impl CategoryCountsTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for CategoryCountsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "category_counts",
            "Count events per category (every category listed, zero included)",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> ExplorerResult<Value> {
        let counts = self.store.category_counts();
        let mut body = Map::new();
        for category in Category::ALL {
            let count = counts.get(&category).copied().unwrap_or(0);
            body.insert(category.to_string(), json!(count));
        }
        json_response(&Value::Object(body))
    }
}
