//! Search criteria chosen by the user

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Category, Event, ExplorerError, Price};

/// Upper price bound of the default range (the whole domain)
pub const PRICE_CEILING: f64 = f64::MAX;

/// Fill ratio from which an event counts as "filling fast"
pub const FILLING_FAST_RATIO: f64 = 0.75;

/// Fill ratio from which an event counts as "last chance"
pub const LAST_CHANCE_RATIO: f64 = 0.9;

/// Constraints narrowing the visible event set.
///
/// Every field is optional in JSON; an omitted field places no constraint on
/// its dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub categories: BTreeSet<Category>,
    pub date_range: DateRange,
    pub price_range: PriceRange,
    pub location: String,
    pub sort_by: SortKey,
    pub availability: Availability,
    /// Single-category tab; overrides `categories` while set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_category: Option<Category>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories the category stage restricts to; empty means all.
    ///
    /// An active quick-category tab wins over the multi-select.
    pub fn effective_categories(&self) -> BTreeSet<Category> {
        match self.quick_category {
            Some(category) => BTreeSet::from([category]),
            None => self.categories.clone(),
        }
    }

    /// True when no field narrows the result set
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.effective_categories().is_empty()
            && self.date_range.is_unbounded()
            && self.price_range == PriceRange::default()
            && self.location.trim().is_empty()
            && self.availability == Availability::All
    }
}

/// Inclusive date bounds; a missing bound is open on that side
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    /// Range covering a single day
    pub fn on(date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            start: Some(date.clone()),
            end: Some(date),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Inclusive price bounds, `[min, max]` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range is usable when it is non-negative and not inverted
    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.max >= self.min
    }

    /// Free events are admitted only by ranges that start at exactly zero
    pub fn admits(&self, price: &Price) -> bool {
        if !self.is_valid() {
            return false;
        }
        match price {
            Price::Free => self.min == 0.0,
            Price::Amount(amount) => *amount >= self.min && *amount <= self.max,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: PRICE_CEILING,
        }
    }
}

impl From<(f64, f64)> for PriceRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<PriceRange> for (f64, f64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Earliest first
    #[default]
    Date,
    /// Cheapest first, Free counting as zero
    Price,
    /// Title, case-insensitive
    Name,
    /// Most tickets sold first
    Popularity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            "popularity" => Ok(SortKey::Popularity),
            other => Err(ExplorerError::UnknownOption {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

/// Ticket availability filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    All,
    /// Seats remain (or capacity is unlimited)
    Available,
    /// At least 75% sold but not sold out
    FillingFast,
    /// At least 90% sold but not sold out
    LastChance,
}

impl Availability {
    pub fn admits(&self, event: &Event) -> bool {
        let open = event.remaining_seats() != Some(0);
        match self {
            Availability::All => true,
            Availability::Available => open,
            Availability::FillingFast => {
                open && event.fill_ratio().is_some_and(|r| r >= FILLING_FAST_RATIO)
            }
            Availability::LastChance => {
                open && event.fill_ratio().is_some_and(|r| r >= LAST_CHANCE_RATIO)
            }
        }
    }
}

impl FromStr for Availability {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Availability::All),
            "available" => Ok(Availability::Available),
            "filling-fast" => Ok(Availability::FillingFast),
            "last-chance" => Ok(Availability::LastChance),
            other => Err(ExplorerError::UnknownOption {
                kind: "availability",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewEvent;

    #[test]
    fn test_empty_json_gives_defaults() {
        let criteria: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.sort_by, SortKey::Date);
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_json_shape() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"searchTerm":"kathmandu","categories":["Music"],"priceRange":[0,5000],"sortBy":"price"}"#,
        )
        .unwrap();
        assert_eq!(criteria.search_term, "kathmandu");
        assert!(criteria.categories.contains(&Category::Music));
        assert_eq!(criteria.price_range, PriceRange::new(0.0, 5000.0));
        assert_eq!(criteria.sort_by, SortKey::Price);
    }

    #[test]
    fn test_free_only_admitted_from_zero() {
        assert!(PriceRange::new(0.0, 0.0).admits(&Price::Free));
        assert!(!PriceRange::new(0.0, 0.0).admits(&Price::Amount(10.0)));
        assert!(!PriceRange::new(1.0, 100.0).admits(&Price::Free));
        assert!(PriceRange::new(1.0, 100.0).admits(&Price::Amount(100.0)));
    }

    #[test]
    fn test_invalid_range_admits_nothing() {
        assert!(!PriceRange::new(-10.0, 100.0).admits(&Price::Amount(5.0)));
        assert!(!PriceRange::new(50.0, 10.0).admits(&Price::Amount(20.0)));
        assert!(!PriceRange::new(f64::NAN, 10.0).admits(&Price::Free));
    }

    #[test]
    fn test_quick_category_overrides_multi_select() {
        let mut criteria = FilterCriteria::new();
        criteria.categories.insert(Category::Music);
        criteria.categories.insert(Category::Food);
        assert_eq!(criteria.effective_categories().len(), 2);

        criteria.quick_category = Some(Category::Art);
        assert_eq!(
            criteria.effective_categories(),
            BTreeSet::from([Category::Art])
        );
    }

    #[test]
    fn test_availability_buckets() {
        let base = NewEvent::new("Show", "2025-05-01", "Patan", Category::Music, Price::Free);
        let unlimited = base.clone().into_event("1".into());
        let quiet = base.clone().with_attendance(100, 10).into_event("2".into());
        let busy = base.clone().with_attendance(100, 80).into_event("3".into());
        let nearly = base.clone().with_attendance(100, 95).into_event("4".into());
        let sold_out = base.with_attendance(100, 100).into_event("5".into());

        assert!(Availability::Available.admits(&unlimited));
        assert!(!Availability::Available.admits(&sold_out));
        assert!(!Availability::FillingFast.admits(&quiet));
        assert!(Availability::FillingFast.admits(&busy));
        assert!(!Availability::LastChance.admits(&busy));
        assert!(Availability::LastChance.admits(&nearly));
        assert!(!Availability::LastChance.admits(&sold_out));
        assert!(!Availability::FillingFast.admits(&unlimited));
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("Popularity".parse::<SortKey>().unwrap(), SortKey::Popularity);
        assert!("rating".parse::<SortKey>().is_err());
        assert_eq!(
            "filling-fast".parse::<Availability>().unwrap(),
            Availability::FillingFast
        );
    }
}
