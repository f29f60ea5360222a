//! List events tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{optional_arg, Tool, ToolDefinition};
use crate::server::text_response;
use crate::types::{Event, ExplorerResult};

/// Tool for reading the catalogue in insertion order, with optional paging
pub struct ListEventsTool {
    store: Arc<EventStore>,
}

impl ListEventsTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListEventsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "list_events",
            "List all events in insertion order. Supports pagination for large catalogues.",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of events to return (default: no limit)"
                    },
                    "offset": {
                        "type": "integer",
                        "description": "Number of events to skip (default: 0)"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let limit: Option<usize> = optional_arg(&params, "limit")?;
        let offset: usize = optional_arg(&params, "offset")?.unwrap_or(0);

        let all = self.store.get_all_events();
        let total = all.len();
        let page: Vec<Event> = match limit {
            Some(lim) => all.into_iter().skip(offset).take(lim).collect(),
            None => all.into_iter().skip(offset).collect(),
        };

        let body = json!({ "total": total, "events": page });
        Ok(text_response(serde_json::to_string_pretty(&body)?))
    }
}
