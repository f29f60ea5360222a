//! Update event tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{required_arg, Tool, ToolDefinition};
use crate::server::{error_response, json_response, text_response};
use crate::types::{EventUpdate, ExplorerError, ExplorerResult};

/// Tool for merging new field values into an existing event
pub struct UpdateEventTool {
    store: Arc<EventStore>,
}

impl UpdateEventTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for UpdateEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "update_event",
            "Update fields of an event. Fields not given are kept.",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Event id" },
                    "updates": {
                        "type": "object",
                        "description": "Any of: title, description, date, time, location, venue, category, price, imageUrl, capacity, ticketsSold"
                    }
                },
                "required": ["id", "updates"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let id: String = required_arg(&params, "id")?;
        let updates: EventUpdate = required_arg(&params, "updates")?;

        match self.store.update_event(&id, updates) {
            Ok(Some(event)) => json_response(&event),
            Ok(None) => Ok(text_response(format!("No event with id '{}'", id))),
            Err(e @ ExplorerError::Validation(_)) => Ok(error_response(e)),
            Err(e) => Err(e),
        }
    }
}
