//! Data types for the event explorer
//!
//! This module contains the core data structures used throughout the application.

mod category;
mod criteria;
mod error;
mod event;
mod price;

pub use category::Category;
pub use criteria::{
    Availability, DateRange, FilterCriteria, PriceRange, SortKey, FILLING_FAST_RATIO,
    LAST_CHANCE_RATIO, PRICE_CEILING,
};
pub use error::{ExplorerError, ExplorerResult};
pub use event::{parse_date, Event, EventUpdate, NewEvent, DATE_FORMAT};
pub use price::{Price, FREE_TOKEN};

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u32) -> bool {
    *val == 0
}
