//! Create event tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{required_arg, Tool, ToolDefinition};
use crate::server::{error_response, text_response};
use crate::types::{ExplorerError, ExplorerResult, NewEvent};
use crate::validation::validate_date;

/// Tool for adding an event to the catalogue
pub struct CreateEventTool {
    store: Arc<EventStore>,
}

impl CreateEventTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for CreateEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "create_event",
            "Create a new event. The store assigns the id.",
            json!({
                "type": "object",
                "properties": {
                    "event": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "description": "Display title, must not be empty" },
                            "description": { "type": "string" },
                            "date": { "type": "string", "description": "Calendar date, YYYY-MM-DD" },
                            "time": { "type": "string", "description": "Free-text time, e.g. '9:00 AM - 5:00 PM'" },
                            "location": { "type": "string" },
                            "venue": { "type": "string" },
                            "category": { "type": "string", "description": "Technology, Music, Food, Art, Sports, Networking, Business, Education, Health or Entertainment" },
                            "price": { "type": "string", "description": "\"Free\" or a non-negative amount" },
                            "imageUrl": { "type": "string" },
                            "capacity": { "type": "integer", "description": "Seat limit, 0 for unlimited" },
                            "ticketsSold": { "type": "integer" }
                        },
                        "required": ["title", "date", "location", "category"]
                    }
                },
                "required": ["event"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let data: NewEvent = required_arg(&params, "event")?;
        let warning = validate_date(&data.date);

        let created = match self.store.create_event(data) {
            Ok(event) => event,
            Err(e @ ExplorerError::Validation(_)) => return Ok(error_response(e)),
            Err(e) => return Err(e),
        };

        let body = serde_json::to_string_pretty(&created)?;
        Ok(match warning {
            Some(warning) => text_response(format!("{}\n\n{}", body, warning)),
            None => text_response(body),
        })
    }
}
