//! CRUD operations for the event store

use tracing::{debug, info};

use crate::types::{Event, EventUpdate, ExplorerResult, NewEvent};
use crate::validation::{validate_event, validate_new_event};

use super::EventStore;

/// Create a new event (holds the write lock for id allocation and insert)
pub fn create_event(store: &EventStore, data: NewEvent) -> ExplorerResult<Event> {
    validate_new_event(&data)?;

    let mut catalogue = store.catalogue.write();
    let id = catalogue.next_id.to_string();
    catalogue.next_id += 1;

    let event = data.into_event(id);
    catalogue.events.push(event.clone());

    info!(id = %event.id, title = %event.title, "event created");
    Ok(event)
}

/// Copy of every event in insertion order
pub fn get_all_events(store: &EventStore) -> Vec<Event> {
    let events = store.catalogue.read().events.clone();
    debug!(count = events.len(), "listing events");
    events
}

/// Look up one event; an unknown id is not an error
pub fn get_event_by_id(store: &EventStore, id: &str) -> Option<Event> {
    let found = store
        .catalogue
        .read()
        .events
        .iter()
        .find(|e| e.id == id)
        .cloned();
    debug!(id, found = found.is_some(), "event lookup");
    found
}

/// Merge `update` into the matching event in place.
///
/// The merge is checked on a copy first, so a rejected update leaves the
/// stored record untouched.
pub fn update_event(
    store: &EventStore,
    id: &str,
    update: EventUpdate,
) -> ExplorerResult<Option<Event>> {
    let mut catalogue = store.catalogue.write();
    let Some(slot) = catalogue.events.iter_mut().find(|e| e.id == id) else {
        info!(id, "event not found for update");
        return Ok(None);
    };

    let mut merged = slot.clone();
    update.apply_to(&mut merged);
    validate_event(&merged)?;
    *slot = merged.clone();

    info!(id, "event updated");
    Ok(Some(merged))
}

/// Remove an event; returns false when the id is unknown
pub fn delete_event(store: &EventStore, id: &str) -> bool {
    let mut catalogue = store.catalogue.write();
    let before = catalogue.events.len();
    catalogue.events.retain(|e| e.id != id);
    let deleted = catalogue.events.len() < before;

    if deleted {
        info!(id, "event deleted");
    } else {
        info!(id, "event not found for deletion");
    }
    deleted
}
