//! Query engine - the filter/sort pipeline
//!
//! `QueryEngine::evaluate` turns a snapshot and a set of criteria into a new,
//! ordered result list. Stages run in a fixed order (text, category, date,
//! price, location, availability) followed by a stable sort, so events that
//! compare equal keep their insertion order.

mod predicate;
mod sort;

use rayon::prelude::*;

use crate::types::{Event, FilterCriteria};

pub use predicate::FilterPredicate;
pub use sort::{compare, compare_titles, sort_events};

/// Threshold for using parallel filtering (snapshot size)
const PARALLEL_FILTER_THRESHOLD: usize = 1000;

/// Stateless evaluator; holds no reference to criteria between calls
pub struct QueryEngine;

impl QueryEngine {
    /// Filter and sort `snapshot` under `criteria`.
    ///
    /// Neither input is modified. An empty result is a normal outcome, and
    /// malformed criteria narrow the result rather than raising an error.
    pub fn evaluate(snapshot: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
        let predicate = FilterPredicate::new(criteria);

        let mut results: Vec<Event> = if criteria.is_unconstrained() {
            snapshot.to_vec()
        } else if snapshot.len() > PARALLEL_FILTER_THRESHOLD {
            // par_iter keeps source order on collect
            snapshot
                .par_iter()
                .filter(|e| predicate.matches(e))
                .cloned()
                .collect()
        } else {
            snapshot
                .iter()
                .filter(|e| predicate.matches(e))
                .cloned()
                .collect()
        };

        sort_events(&mut results, criteria.sort_by);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, NewEvent, Price, PriceRange, SortKey};

    fn kathmandu_pair() -> Vec<Event> {
        vec![
            NewEvent::new(
                "Tech Conference",
                "2025-06-15",
                "Kathmandu",
                Category::Technology,
                Price::Amount(2500.0),
            )
            .into_event("1".to_string()),
            NewEvent::new("Music Fest", "2025-07-22", "Kathmandu", Category::Music, Price::Free)
                .into_event("2".to_string()),
        ]
    }

    #[test]
    fn test_free_only_range() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(0.0, 0.0),
            ..Default::default()
        };
        let results = QueryEngine::evaluate(&kathmandu_pair(), &criteria);
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn test_search_then_price_sort() {
        let criteria = FilterCriteria {
            search_term: "kathmandu".to_string(),
            price_range: PriceRange::new(0.0, 5000.0),
            sort_by: SortKey::Price,
            ..Default::default()
        };
        let results = QueryEngine::evaluate(&kathmandu_pair(), &criteria);
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let snapshot = kathmandu_pair();
        let criteria = FilterCriteria {
            sort_by: SortKey::Name,
            ..Default::default()
        };
        let before = (snapshot.clone(), criteria.clone());
        let _ = QueryEngine::evaluate(&snapshot, &criteria);
        assert_eq!((snapshot, criteria), before);
    }

    #[test]
    fn test_unconstrained_criteria_keep_every_event() {
        let mut snapshot = kathmandu_pair();
        snapshot.push(
            NewEvent::new("Open Mic", "someday", "Patan", Category::Music, Price::Free)
                .into_event("3".to_string()),
        );
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());

        let results = QueryEngine::evaluate(&snapshot, &criteria);
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_large_snapshot_keeps_order() {
        let snapshot: Vec<Event> = (0..2500)
            .map(|i| {
                let category = if i % 2 == 0 { Category::Music } else { Category::Art };
                NewEvent::new(
                    format!("Event {i}"),
                    "2025-01-01",
                    "Kathmandu",
                    category,
                    Price::Free,
                )
                .into_event(i.to_string())
            })
            .collect();
        let mut criteria = FilterCriteria::new();
        criteria.categories.insert(Category::Music);

        let results = QueryEngine::evaluate(&snapshot, &criteria);
        assert_eq!(results.len(), 1250);
        assert!(results
            .windows(2)
            .all(|w| w[0].id.parse::<u32>().unwrap() < w[1].id.parse::<u32>().unwrap()));
    }
}
