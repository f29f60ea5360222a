//! Result ordering

use std::cmp::Ordering;

use feruca::Collator;

use crate::types::{Event, SortKey};

/// Compare two events under `key`.
///
/// Equal events compare `Equal`; callers rely on a stable sort to keep
/// insertion order among them.
pub fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        // Valid dates first, malformed ones after
        SortKey::Date => match (a.parsed_date(), b.parsed_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Price => a.price.cmp_value(&b.price),
        SortKey::Name => compare_titles(&a.title, &b.title),
        SortKey::Popularity => b.tickets_sold.cmp(&a.tickets_sold),
    }
}

/// Stable in-place sort
pub fn sort_events(events: &mut [Event], key: SortKey) {
    match key {
        // One collator for the whole sort
        SortKey::Name => {
            let mut collator = title_collator();
            events.sort_by(|a, b| collate_titles(&mut collator, &a.title, &b.title));
        }
        _ => events.sort_by(|a, b| compare(a, b, key)),
    }
}

/// Locale-aware title order: Unicode collation (CLDR root) of the
/// lowercased titles, so "école" sorts between "apple" and "zumba".
/// Titles differing only in case compare `Equal`.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collate_titles(&mut title_collator(), a, b)
}

/// CLDR root collation with variable weighting shifted: spaces and
/// punctuation only break ties
fn title_collator() -> Collator {
    Collator::default()
}

fn collate_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    collator.collate(a.as_str(), b.as_str())
}
