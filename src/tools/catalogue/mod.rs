//! Catalogue tools for CRUD operations on events

mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod update_event;

pub use create_event::CreateEventTool;
pub use delete_event::DeleteEventTool;
pub use get_event::GetEventTool;
pub use list_events::ListEventsTool;
pub use update_event::UpdateEventTool;
