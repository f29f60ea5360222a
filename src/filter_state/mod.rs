//! Filter state - criteria held by a search session
//!
//! A `FilterState` owns the criteria for one search session and the last
//! result list. Two synchronization modes share the same component:
//!
//! - `SyncMode::Live`: every setter re-evaluates with the full criteria
//! - `SyncMode::Submit`: setters only mark the state dirty; `submit()`
//!   evaluates
//!
//! `reset()` restores the defaults and re-evaluates in both modes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event_store::SnapshotSource;
use crate::query::QueryEngine;
use crate::types::{
    Availability, Category, DateRange, Event, ExplorerError, FilterCriteria, PriceRange, SortKey,
};

/// When criteria changes reach the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Re-evaluate on every change
    #[default]
    Live,
    /// Re-evaluate only on `submit()` or `reset()`
    Submit,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Live => f.write_str("live"),
            SyncMode::Submit => f.write_str("submit"),
        }
    }
}

impl FromStr for SyncMode {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(SyncMode::Live),
            "submit" => Ok(SyncMode::Submit),
            other => Err(ExplorerError::UnknownOption {
                kind: "sync mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Criteria plus the results they last produced
pub struct FilterState<S: SnapshotSource> {
    source: S,
    mode: SyncMode,
    criteria: FilterCriteria,
    results: Vec<Event>,
    dirty: bool,
    evaluations: u64,
}

impl<S: SnapshotSource> FilterState<S> {
    /// Start a session with default criteria and an initial evaluation
    pub fn new(source: S, mode: SyncMode) -> Self {
        let mut state = Self {
            source,
            mode,
            criteria: FilterCriteria::default(),
            results: Vec::new(),
            dirty: false,
            evaluations: 0,
        };
        state.refresh();
        state
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Results of the most recent evaluation
    pub fn results(&self) -> &[Event] {
        &self.results
    }

    /// Whether criteria changed since the last evaluation
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times the query engine has run for this session
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Evaluate now, regardless of mode
    pub fn submit(&mut self) -> &[Event] {
        self.refresh();
        &self.results
    }

    /// Restore default criteria and evaluate
    pub fn reset(&mut self) -> &[Event] {
        self.criteria = FilterCriteria::default();
        self.refresh();
        &self.results
    }

    /// Apply an arbitrary edit to the criteria
    pub fn update(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        edit(&mut self.criteria);
        self.changed();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.update(|c| c.search_term = term);
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, category: Category) {
        self.update(|c| {
            if !c.categories.remove(&category) {
                c.categories.insert(category);
            }
        });
    }

    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        let categories: BTreeSet<Category> = categories.into_iter().collect();
        self.update(|c| c.categories = categories);
    }

    /// Select a category tab; `None` is the "All" tab
    pub fn set_quick_category(&mut self, category: Option<Category>) {
        self.update(|c| c.quick_category = category);
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.update(|c| c.date_range = range);
    }

    pub fn set_date_start(&mut self, start: Option<String>) {
        self.update(|c| c.date_range.start = start);
    }

    pub fn set_date_end(&mut self, end: Option<String>) {
        self.update(|c| c.date_range.end = end);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.update(|c| c.price_range = range);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.update(|c| c.location = location);
    }

    pub fn set_sort_by(&mut self, key: SortKey) {
        self.update(|c| c.sort_by = key);
    }

    pub fn set_availability(&mut self, availability: Availability) {
        self.update(|c| c.availability = availability);
    }

    fn changed(&mut self) {
        match self.mode {
            SyncMode::Live => self.refresh(),
            SyncMode::Submit => self.dirty = true,
        }
    }

    fn refresh(&mut self) {
        let snapshot = self.source.snapshot();
        self.results = QueryEngine::evaluate(&snapshot, &self.criteria);
        self.dirty = false;
        self.evaluations += 1;
        debug!(
            mode = %self.mode,
            evaluation = self.evaluations,
            matched = self.results.len(),
            "filter state refreshed"
        );
    }
}
