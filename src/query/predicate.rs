//! Per-event inclusion test

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::types::{parse_date, Availability, Category, Event, FilterCriteria, PriceRange};

/// Date bounds after parsing. A malformed bound makes the whole range
/// unsatisfiable instead of silently dropping it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DateBounds {
    Unbounded,
    Between(Option<NaiveDate>, Option<NaiveDate>),
    Unsatisfiable,
}

/// Criteria prepared once per evaluation: terms case-folded, dates parsed,
/// effective categories resolved.
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    term: Option<String>,
    categories: BTreeSet<Category>,
    dates: DateBounds,
    price: PriceRange,
    location: Option<String>,
    availability: Availability,
}

impl FilterPredicate {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            term: fold_non_empty(&criteria.search_term),
            categories: criteria.effective_categories(),
            dates: date_bounds(&criteria.date_range.start, &criteria.date_range.end),
            price: criteria.price_range,
            location: fold_non_empty(&criteria.location),
            availability: criteria.availability,
        }
    }

    /// True when `event` passes every stage
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_text(event)
            && self.matches_category(event)
            && self.matches_dates(event)
            && self.price.admits(&event.price)
            && self.matches_location(event)
            && self.availability.admits(event)
    }

    fn matches_text(&self, event: &Event) -> bool {
        match &self.term {
            None => true,
            Some(term) => {
                contains_folded(&event.title, term)
                    || contains_folded(&event.location, term)
                    || contains_folded(event.category.as_str(), term)
            }
        }
    }

    fn matches_category(&self, event: &Event) -> bool {
        self.categories.is_empty() || self.categories.contains(&event.category)
    }

    fn matches_dates(&self, event: &Event) -> bool {
        match self.dates {
            DateBounds::Unbounded => true,
            DateBounds::Unsatisfiable => false,
            DateBounds::Between(start, end) => match event.parsed_date() {
                None => false,
                Some(date) => {
                    start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
                }
            },
        }
    }

    fn matches_location(&self, event: &Event) -> bool {
        match &self.location {
            None => true,
            Some(location) => contains_folded(&event.location, location),
        }
    }
}

fn fold_non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

fn date_bounds(start: &Option<String>, end: &Option<String>) -> DateBounds {
    if start.is_none() && end.is_none() {
        return DateBounds::Unbounded;
    }
    let parse = |bound: &Option<String>| -> Result<Option<NaiveDate>, ()> {
        match bound {
            None => Ok(None),
            Some(raw) => parse_date(raw).map(Some).ok_or(()),
        }
    };
    match (parse(start), parse(end)) {
        (Ok(s), Ok(e)) => DateBounds::Between(s, e),
        _ => DateBounds::Unsatisfiable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateRange, NewEvent, Price};

    fn event(title: &str, date: &str, location: &str, category: Category) -> Event {
        NewEvent::new(title, date, location, category, Price::Amount(100.0))
            .into_event("1".to_string())
    }

    #[test]
    fn test_text_matches_title_location_and_category() {
        let mut criteria = FilterCriteria::new();
        let e = event("Jazz Night", "2025-03-01", "Pokhara Lakeside", Category::Music);

        for term in ["jazz", "LAKESIDE", "  music  "] {
            criteria.search_term = term.to_string();
            assert!(FilterPredicate::new(&criteria).matches(&e), "{term}");
        }

        criteria.search_term = "opera".to_string();
        assert!(!FilterPredicate::new(&criteria).matches(&e));
    }

    #[test]
    fn test_blank_term_is_ignored() {
        let mut criteria = FilterCriteria::new();
        criteria.search_term = "   ".to_string();
        let e = event("Jazz Night", "2025-03-01", "Pokhara", Category::Music);
        assert!(FilterPredicate::new(&criteria).matches(&e));
    }

    #[test]
    fn test_date_range_is_inclusive_and_open_ended() {
        let e = event("Expo", "2025-06-15", "Kathmandu", Category::Business);
        let mut criteria = FilterCriteria::new();

        criteria.date_range = DateRange::on("2025-06-15");
        assert!(FilterPredicate::new(&criteria).matches(&e));

        criteria.date_range = DateRange::new(Some("2025-06-16".into()), None);
        assert!(!FilterPredicate::new(&criteria).matches(&e));

        criteria.date_range = DateRange::new(None, Some("2025-12-31".into()));
        assert!(FilterPredicate::new(&criteria).matches(&e));
    }

    #[test]
    fn test_malformed_dates_fail_closed() {
        let good = event("Expo", "2025-06-15", "Kathmandu", Category::Business);
        let bad = event("Expo", "June 15th", "Kathmandu", Category::Business);
        let mut criteria = FilterCriteria::new();

        // Without a date constraint a malformed event date is harmless
        assert!(FilterPredicate::new(&criteria).matches(&bad));

        criteria.date_range = DateRange::new(Some("2025-01-01".into()), None);
        assert!(FilterPredicate::new(&criteria).matches(&good));
        assert!(!FilterPredicate::new(&criteria).matches(&bad));

        criteria.date_range = DateRange::new(Some("soon".into()), None);
        assert!(!FilterPredicate::new(&criteria).matches(&good));
    }

    #[test]
    fn test_location_filter_is_case_insensitive() {
        let e = event("Expo", "2025-06-15", "Kathmandu Convention Center", Category::Business);
        let mut criteria = FilterCriteria::new();
        criteria.location = "convention".to_string();
        assert!(FilterPredicate::new(&criteria).matches(&e));
        criteria.location = "Pokhara".to_string();
        assert!(!FilterPredicate::new(&criteria).matches(&e));
    }

    #[test]
    fn test_category_membership() {
        let e = event("Expo", "2025-06-15", "Kathmandu", Category::Business);
        let mut criteria = FilterCriteria::new();
        criteria.categories.insert(Category::Music);
        assert!(!FilterPredicate::new(&criteria).matches(&e));
        criteria.categories.insert(Category::Business);
        assert!(FilterPredicate::new(&criteria).matches(&e));
    }
}
