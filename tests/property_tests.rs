//! Property tests for the query pipeline

use proptest::prelude::*;

use event_explorer::query::{compare_titles, QueryEngine};
use event_explorer::types::{
    Availability, Category, DateRange, Event, FilterCriteria, NewEvent, Price, PriceRange,
    SortKey,
};

const LOCATIONS: [&str; 4] = ["Kathmandu", "Pokhara Lakeside", "Patan Durbar", "Bhaktapur"];

fn arb_price() -> impl Strategy<Value = Price> {
    prop_oneof![
        1 => Just(Price::Free),
        2 => prop::sample::select(vec![25.0, 75.0, 1200.0, 2500.0]).prop_map(Price::Amount),
        2 => (1u32..5000).prop_map(|p| Price::Amount(p as f64)),
    ]
}

/// Few distinct days, so equal dates are common
fn arb_date() -> impl Strategy<Value = String> {
    (2024i32..2026, 1u32..4, 1u32..6).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn arb_new_event() -> impl Strategy<Value = NewEvent> {
    (
        "[A-Za-z]{1,8}( [A-Za-z]{1,8})?",
        arb_date(),
        0..LOCATIONS.len(),
        0..Category::ALL.len(),
        arb_price(),
        (0u32..50, 0u32..50),
    )
        .prop_map(|(title, date, loc, cat, price, (capacity, sold))| {
            NewEvent::new(title, date, LOCATIONS[loc], Category::ALL[cat], price)
                .with_attendance(capacity, sold.min(capacity))
        })
}

fn arb_snapshot() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_new_event(), 0..40).prop_map(|events| {
        events
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.into_event((i + 1).to_string()))
            .collect()
    })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Date),
        Just(SortKey::Price),
        Just(SortKey::Name),
        Just(SortKey::Popularity),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,3}"],
        prop::collection::btree_set(arb_category(), 0..3),
        proptest::option::of(arb_category()),
        (proptest::option::of(arb_date()), proptest::option::of(arb_date())),
        (0u32..3000, 0u32..5000),
        prop::sample::select(vec!["", "kath", "LAKE", "durbar"]),
        arb_sort_key(),
        prop::sample::select(vec![
            Availability::All,
            Availability::Available,
            Availability::FillingFast,
            Availability::LastChance,
        ]),
    )
        .prop_map(
            |(term, categories, quick, (start, end), (min, max), location, sort_by, availability)| {
                FilterCriteria {
                    search_term: term,
                    categories,
                    quick_category: quick,
                    date_range: DateRange::new(start, end),
                    price_range: PriceRange::new(min as f64, max as f64),
                    location: location.to_string(),
                    sort_by,
                    availability,
                }
            },
        )
}

fn id_of(event: &Event) -> u64 {
    event.id.parse().unwrap()
}

proptest! {
    #[test]
    fn default_criteria_returns_everything_by_date(snapshot in arb_snapshot()) {
        let results = QueryEngine::evaluate(&snapshot, &FilterCriteria::default());

        prop_assert_eq!(results.len(), snapshot.len());
        for pair in results.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
            if pair[0].date == pair[1].date {
                prop_assert!(id_of(&pair[0]) < id_of(&pair[1]));
            }
        }
    }

    #[test]
    fn price_sort_keeps_input_order_for_ties(snapshot in arb_snapshot()) {
        let criteria = FilterCriteria { sort_by: SortKey::Price, ..Default::default() };
        let results = QueryEngine::evaluate(&snapshot, &criteria);

        prop_assert_eq!(results.len(), snapshot.len());
        for pair in results.windows(2) {
            let (a, b) = (pair[0].price.value(), pair[1].price.value());
            prop_assert!(a <= b);
            if a == b {
                prop_assert!(id_of(&pair[0]) < id_of(&pair[1]));
            }
        }
    }

    #[test]
    fn every_result_contains_search_term(
        snapshot in arb_snapshot(),
        term in "[a-z]{1,3}",
    ) {
        let criteria = FilterCriteria { search_term: term.clone(), ..Default::default() };
        let results = QueryEngine::evaluate(&snapshot, &criteria);

        for event in &results {
            let haystacks = [
                event.title.to_lowercase(),
                event.location.to_lowercase(),
                event.category.as_str().to_lowercase(),
            ];
            prop_assert!(haystacks.iter().any(|h| h.contains(&term)));
        }
        let expected = snapshot
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&term)
                    || e.location.to_lowercase().contains(&term)
                    || e.category.as_str().to_lowercase().contains(&term)
            })
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn zero_price_range_keeps_only_free(snapshot in arb_snapshot()) {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(0.0, 0.0),
            ..Default::default()
        };
        let results = QueryEngine::evaluate(&snapshot, &criteria);

        prop_assert!(results.iter().all(|e| e.price.is_free()));
        prop_assert_eq!(results.len(), snapshot.iter().filter(|e| e.price.is_free()).count());
    }

    #[test]
    fn positive_minimum_excludes_free(snapshot in arb_snapshot(), min in 1u32..3000) {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(min as f64, 5000.0),
            ..Default::default()
        };
        let results = QueryEngine::evaluate(&snapshot, &criteria);

        prop_assert!(results.iter().all(|e| !e.price.is_free()));
        prop_assert!(results.iter().all(|e| e.price.value() >= min as f64));
    }

    #[test]
    fn evaluation_is_idempotent(snapshot in arb_snapshot(), criteria in arb_criteria()) {
        let first = QueryEngine::evaluate(&snapshot, &criteria);
        let second = QueryEngine::evaluate(&snapshot, &criteria);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn name_sort_keeps_input_order_for_ties(snapshot in arb_snapshot()) {
        let criteria = FilterCriteria { sort_by: SortKey::Name, ..Default::default() };
        let results = QueryEngine::evaluate(&snapshot, &criteria);

        prop_assert_eq!(results.len(), snapshot.len());
        for pair in results.windows(2) {
            match compare_titles(&pair[0].title, &pair[1].title) {
                std::cmp::Ordering::Greater => prop_assert!(false, "titles out of order"),
                std::cmp::Ordering::Equal => prop_assert!(id_of(&pair[0]) < id_of(&pair[1])),
                std::cmp::Ordering::Less => {}
            }
        }
    }
}
