//! Session tools - a shared filter session driven step by step
//!
//! Both tools operate on one `FilterState`, so a client can type a search
//! term, toggle categories and submit the way an explore page would.

mod reset_filters;
mod update_filters;

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::event_store::EventStore;
use crate::filter_state::FilterState;
use crate::server::{json_response, text_response};
use crate::types::ExplorerResult;
use crate::view::{render, ViewMode};

pub use reset_filters::ResetFiltersTool;
pub use update_filters::UpdateFiltersTool;

/// Filter session shared by the session tools
pub type ExploreSession = Arc<Mutex<FilterState<Arc<EventStore>>>>;

/// Describe the session after a change
fn session_response(
    state: &FilterState<Arc<EventStore>>,
    view: Option<ViewMode>,
) -> ExplorerResult<Value> {
    match view {
        Some(mode) => Ok(text_response(render(state.results(), mode))),
        None => json_response(&json!({
            "mode": state.mode(),
            "dirty": state.is_dirty(),
            "evaluations": state.evaluations(),
            "criteria": state.criteria(),
            "count": state.results().len(),
            "events": state.results(),
        })),
    }
}
