//! Query operations for the event store

use std::collections::BTreeMap;

use tracing::debug;

use crate::query::QueryEngine;
use crate::types::{Category, Event, FilterCriteria};

use super::{EventStore, SnapshotSource};

/// Run `criteria` against the store's current snapshot.
///
/// The lock is released before evaluation starts; filtering works on the copy.
pub fn search_events(store: &EventStore, criteria: &FilterCriteria) -> Vec<Event> {
    let snapshot = store.snapshot();
    let results = QueryEngine::evaluate(&snapshot, criteria);
    debug!(
        scanned = snapshot.len(),
        matched = results.len(),
        sort_by = %criteria.sort_by,
        "search completed"
    );
    results
}

/// Number of events per category, only categories with events
pub fn category_counts(store: &EventStore) -> BTreeMap<Category, usize> {
    let catalogue = store.catalogue.read();
    let mut counts = BTreeMap::new();
    for event in &catalogue.events {
        *counts.entry(event.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewEvent, Price};

    #[test]
    fn test_category_counts() {
        let store = EventStore::new();
        for (title, category) in [
            ("A", Category::Music),
            ("B", Category::Music),
            ("C", Category::Art),
        ] {
            store
                .create_event(NewEvent::new(
                    title,
                    "2025-01-01",
                    "Bhaktapur",
                    category,
                    Price::Free,
                ))
                .unwrap();
        }

        let counts = category_counts(&store);
        assert_eq!(counts.get(&Category::Music), Some(&2));
        assert_eq!(counts.get(&Category::Art), Some(&1));
        assert_eq!(counts.get(&Category::Food), None);
    }

    #[test]
    fn test_search_sees_later_mutations() {
        let store = EventStore::new();
        let criteria = FilterCriteria::default();
        assert!(search_events(&store, &criteria).is_empty());

        store
            .create_event(NewEvent::new(
                "Gig",
                "2025-01-01",
                "Lalitpur",
                Category::Music,
                Price::Free,
            ))
            .unwrap();
        assert_eq!(search_events(&store, &criteria).len(), 1);
    }
}
