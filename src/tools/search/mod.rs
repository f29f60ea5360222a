//! Search tools

mod category_counts;
mod search_events;

pub use category_counts::CategoryCountsTool;
pub use search_events::{criteria_schema_properties, SearchEventsTool};
