//! Tool implementations
//!
//! This module contains all 9 tools organized by category:
//! - Catalogue tools (5): CRUD operations on events
//! - Search tools (2): one-shot search and category counts
//! - Session tools (2): a stateful filter session

pub mod catalogue;
pub mod search;
pub mod session;

use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event_store::EventStore;
use crate::filter_state::{FilterState, SyncMode};
use crate::server::ToolServer;

// Re-export all tools for convenience
pub use catalogue::{
    CreateEventTool, DeleteEventTool, GetEventTool, ListEventsTool, UpdateEventTool,
};
pub use search::{CategoryCountsTool, SearchEventsTool};
pub use session::{ExploreSession, ResetFiltersTool, UpdateFiltersTool};

/// Register all tools with the server
pub fn register_all_tools<R: BufRead, W: Write>(
    server: &mut ToolServer<R, W>,
    store: Arc<EventStore>,
    mode: SyncMode,
) {
    // Catalogue tools (5)
    server.register_tool(Box::new(CreateEventTool::new(store.clone())));
    server.register_tool(Box::new(GetEventTool::new(store.clone())));
    server.register_tool(Box::new(ListEventsTool::new(store.clone())));
    server.register_tool(Box::new(UpdateEventTool::new(store.clone())));
    server.register_tool(Box::new(DeleteEventTool::new(store.clone())));

    // Search tools (2)
    server.register_tool(Box::new(SearchEventsTool::new(store.clone())));
    server.register_tool(Box::new(CategoryCountsTool::new(store.clone())));

    // Session tools (2)
    let session: ExploreSession = Arc::new(Mutex::new(FilterState::new(store, mode)));
    server.register_tool(Box::new(UpdateFiltersTool::new(session.clone())));
    server.register_tool(Box::new(ResetFiltersTool::new(session)));
}
