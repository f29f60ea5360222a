//! Update filters tool

use serde_json::{json, Value};

use crate::protocol::{optional_arg, Tool, ToolDefinition};
use crate::tools::search::criteria_schema_properties;
use crate::types::{
    Availability, Category, DateRange, ExplorerError, ExplorerResult, PriceRange, SortKey,
};
use crate::view::ViewMode;

use super::{session_response, ExploreSession};

/// Tab label meaning "no quick category"
const ALL_TAB: &str = "All";

/// Tool applying filter changes to the explore session
pub struct UpdateFiltersTool {
    session: ExploreSession,
}

impl UpdateFiltersTool {
    pub fn new(session: ExploreSession) -> Self {
        Self { session }
    }
}

impl Tool for UpdateFiltersTool {
    fn definition(&self) -> ToolDefinition {
        let mut properties = criteria_schema_properties();
        if let Some(map) = properties.as_object_mut() {
            map.insert(
                "toggleCategory".to_string(),
                json!({ "type": "string", "description": "Add the category if absent, remove it if present" }),
            );
            map.insert(
                "quickCategory".to_string(),
                json!({ "type": "string", "description": "Category tab; \"All\" clears it. Overrides categories while set" }),
            );
            map.insert(
                "submit".to_string(),
                json!({ "type": "boolean", "description": "Evaluate now (needed in submit mode)" }),
            );
        }

        ToolDefinition::new(
            "update_filters",
            "Change filters of the explore session. In live mode every change re-runs the search; in submit mode results refresh on submit.",
            json!({ "type": "object", "properties": properties }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        // Parse everything before touching the session so a bad argument
        // leaves it unchanged
        let search_term: Option<String> = optional_arg(&params, "searchTerm")?;
        let categories: Option<Vec<Category>> = optional_arg(&params, "categories")?;
        let toggle: Option<Category> = optional_arg(&params, "toggleCategory")?;
        let quick: Option<String> = optional_arg(&params, "quickCategory")?;
        let quick = match quick {
            None => None,
            Some(tab) if tab.trim().eq_ignore_ascii_case(ALL_TAB) => Some(None),
            Some(tab) => Some(Some(
                tab.parse::<Category>()
                    .map_err(|e| ExplorerError::InvalidParams(e.to_string()))?,
            )),
        };
        let date_range: Option<DateRange> = optional_arg(&params, "dateRange")?;
        let price_range: Option<PriceRange> = optional_arg(&params, "priceRange")?;
        let location: Option<String> = optional_arg(&params, "location")?;
        let sort_by: Option<SortKey> = optional_arg(&params, "sortBy")?;
        let availability: Option<Availability> = optional_arg(&params, "availability")?;
        let submit: bool = optional_arg(&params, "submit")?.unwrap_or(false);
        let view: Option<ViewMode> = optional_arg(&params, "view")?;

        let mut state = self.session.lock();
        if let Some(term) = search_term {
            state.set_search_term(term);
        }
        if let Some(categories) = categories {
            state.set_categories(categories);
        }
        if let Some(category) = toggle {
            state.toggle_category(category);
        }
        if let Some(tab) = quick {
            state.set_quick_category(tab);
        }
        if let Some(range) = date_range {
            state.set_date_range(range);
        }
        if let Some(range) = price_range {
            state.set_price_range(range);
        }
        if let Some(location) = location {
            state.set_location(location);
        }
        if let Some(key) = sort_by {
            state.set_sort_by(key);
        }
        if let Some(availability) = availability {
            state.set_availability(availability);
        }
        if submit {
            state.submit();
        }

        session_response(&state, view)
    }
}
