//! Reset filters tool

use serde_json::{json, Value};

use crate::protocol::{optional_arg, Tool, ToolDefinition};
use crate::types::ExplorerResult;
use crate::view::ViewMode;

use super::{session_response, ExploreSession};

/// Tool restoring the session's default criteria
pub struct ResetFiltersTool {
    session: ExploreSession,
}

impl ResetFiltersTool {
    pub fn new(session: ExploreSession) -> Self {
        Self { session }
    }
}

impl Tool for ResetFiltersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "reset_filters",
            "Clear every filter of the explore session and show the full catalogue sorted by date",
            json!({
                "type": "object",
                "properties": {
                    "view": { "type": "string", "enum": ["grid", "list", "map"] }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> ExplorerResult<Value> {
        let view: Option<ViewMode> = optional_arg(&params, "view")?;
        let mut state = self.session.lock();
        state.reset();
        session_response(&state, view)
    }
}
