//! Delete event tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{required_arg, Tool, ToolDefinition};
use crate::server::json_response;
use crate::types::ExplorerResult;

/// Tool for removing an event
pub struct DeleteEventTool {
    store: Arc<EventStore>,
}

impl DeleteEventTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for DeleteEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "delete_event",
            "Delete an event by id. Its id is never handed out again.",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Event id" }
                },
                "required": ["id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let id: String = required_arg(&params, "id")?;
        let deleted = self.store.delete_event(&id);
        json_response(&json!({ "id": id, "deleted": deleted }))
    }
}
