//! Get event tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{required_arg, Tool, ToolDefinition};
use crate::server::{json_response, text_response};
use crate::types::ExplorerResult;

/// Tool for fetching one event by id
pub struct GetEventTool {
    store: Arc<EventStore>,
}

impl GetEventTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for GetEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_event",
            "Fetch a single event by id",
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
        match self.store.get_event_by_id(&id) {
            Some(event) => json_response(&event),
            None => Ok(text_response(format!("No event with id '{}'", id))),
        }
    }
}
