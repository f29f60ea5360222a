//! Event Store - authoritative in-memory event catalogue
//!
//! The store owns every event record for the session. It is constructed
//! explicitly and shared by `Arc`; all access goes through an internal
//! `RwLock`, so the stdio tool server and the HTTP API can share one
//! instance.
//!
//! ```text
//! Write Path:
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ Tool/REST    │───►│ validate     │───►│ assign next id,  │
//! │ create/update│    │ input        │    │ append or merge  │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//!
//! Read Path:
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ snapshot()   │───►│ QueryEngine  │───►│ ordered results  │
//! │ (clone)      │    │ ::evaluate   │    │                  │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//! ```

mod crud;
mod query;
mod sample;

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::{Category, Event, EventUpdate, ExplorerResult, FilterCriteria, NewEvent};

pub use sample::sample_events;

/// Anything that can hand out a point-in-time copy of the event list
pub trait SnapshotSource {
    /// Events in insertion order; later mutations of the source do not
    /// affect the returned vector
    fn snapshot(&self) -> Vec<Event>;
}

impl<T: SnapshotSource + ?Sized> SnapshotSource for Arc<T> {
    fn snapshot(&self) -> Vec<Event> {
        (**self).snapshot()
    }
}

impl SnapshotSource for Vec<Event> {
    fn snapshot(&self) -> Vec<Event> {
        self.clone()
    }
}

/// Events plus the id counter, guarded together so id allocation and
/// insertion are one step
#[derive(Debug)]
pub(crate) struct Catalogue {
    pub(crate) events: Vec<Event>,
    pub(crate) next_id: u64,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory event store
#[derive(Debug, Default)]
pub struct EventStore {
    pub(crate) catalogue: RwLock<Catalogue>,
}

impl EventStore {
    /// Create an empty store; the first id handed out is "1"
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding existing records.
    ///
    /// Ids are kept as given. The counter resumes after the largest numeric
    /// id (and never below the record count) so no id is handed out twice.
    pub fn with_events(events: Vec<Event>) -> Self {
        let highest = events
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .max(events.len() as u64);

        Self {
            catalogue: RwLock::new(Catalogue {
                events,
                next_id: highest + 1,
            }),
        }
    }

    /// Create a store seeded with the sample catalogue
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        for event in sample_events() {
            if let Err(e) = store.create_event(event) {
                tracing::warn!(error = %e, "skipping invalid sample event");
            }
        }
        store
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.catalogue.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.read().events.is_empty()
    }
}

impl SnapshotSource for EventStore {
    fn snapshot(&self) -> Vec<Event> {
        self.catalogue.read().events.clone()
    }
}

// Re-export methods from submodules by implementing them here
impl EventStore {
    // CRUD operations (from crud.rs)
    pub fn create_event(&self, data: NewEvent) -> ExplorerResult<Event> {
        crud::create_event(self, data)
    }

    pub fn get_all_events(&self) -> Vec<Event> {
        crud::get_all_events(self)
    }

    pub fn get_event_by_id(&self, id: &str) -> Option<Event> {
        crud::get_event_by_id(self, id)
    }

    pub fn update_event(&self, id: &str, update: EventUpdate) -> ExplorerResult<Option<Event>> {
        crud::update_event(self, id, update)
    }

    pub fn delete_event(&self, id: &str) -> bool {
        crud::delete_event(self, id)
    }

    // Query operations (from query.rs)
    pub fn search_events(&self, criteria: &FilterCriteria) -> Vec<Event> {
        query::search_events(self, criteria)
    }

    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        query::category_counts(self)
    }
}
