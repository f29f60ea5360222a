//! Search events tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::protocol::{optional_arg, Tool, ToolDefinition};
use crate::server::{json_response, text_response};
use crate::types::{ExplorerError, ExplorerResult, FilterCriteria};
use crate::view::{render, ViewMode};

/// JSON schema for the criteria fields, shared with the session tool
pub fn criteria_schema_properties() -> Value {
    json!({
        "searchTerm": {
            "type": "string",
            "description": "Case-insensitive substring matched against title, location and category"
        },
        "categories": {
            "type": "array",
            "items": { "type": "string" },
            "description": "Keep only these categories (empty: all)"
        },
        "dateRange": {
            "type": "object",
            "properties": {
                "start": { "type": "string", "description": "Inclusive lower bound, YYYY-MM-DD" },
                "end": { "type": "string", "description": "Inclusive upper bound, YYYY-MM-DD" }
            }
        },
        "priceRange": {
            "type": "array",
            "items": { "type": "number" },
            "minItems": 2,
            "maxItems": 2,
            "description": "[min, max]; Free events only pass when min is 0"
        },
        "location": { "type": "string", "description": "Substring of the event location" },
        "sortBy": {
            "type": "string",
            "enum": ["date", "price", "name", "popularity"]
        },
        "availability": {
            "type": "string",
            "enum": ["all", "available", "filling-fast", "last-chance"]
        },
        "view": {
            "type": "string",
            "enum": ["grid", "list", "map"],
            "description": "Render the result as text instead of returning JSON"
        }
    })
}

/// Tool for filtering and sorting the catalogue
pub struct SearchEventsTool {
    store: Arc<EventStore>,
}

impl SearchEventsTool {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Tool for SearchEventsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "search_events",
            "Search events. Every field is optional; an omitted field does not constrain the result.",
            json!({
                "type": "object",
                "properties": criteria_schema_properties()
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let view: Option<ViewMode> = optional_arg(&params, "view")?;
        let criteria: FilterCriteria = if params.is_null() {
            FilterCriteria::default()
        } else {
            serde_json::from_value(params)
                .map_err(|e| ExplorerError::InvalidParams(e.to_string()))?
        };

        let results = self.store.search_events(&criteria);

        match view {
            Some(mode) => Ok(text_response(render(&results, mode))),
            None => json_response(&json!({ "count": results.len(), "events": results })),
        }
    }
}
