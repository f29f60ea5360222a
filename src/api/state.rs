//! Shared state for HTTP handlers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::event_store::EventStore;

/// Shared application state for the REST API
pub struct AppState {
    /// The event store (internally synchronized)
    pub store: Arc<EventStore>,

    /// Monotonically increasing counter, bumped on every successful write
    pub sequence_counter: AtomicU64,
}

impl AppState {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            store,
            sequence_counter: AtomicU64::new(0),
        }
    }

    /// Record a write and return the new sequence id
    pub fn bump_sequence(&self) -> u64 {
        self.sequence_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Get the current sequence ID
    pub fn current_sequence_id(&self) -> u64 {
        self.sequence_counter.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_increments_sequence() {
        let state = AppState::new(Arc::new(EventStore::new()));
        assert_eq!(state.current_sequence_id(), 0);
        assert_eq!(state.bump_sequence(), 1);
        assert_eq!(state.current_sequence_id(), 1);
    }
}
