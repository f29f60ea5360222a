//! Validation for event input
//!
//! Hard checks reject a write; soft checks only produce a warning string.

mod types;

pub use types::{validate_date, validate_event, validate_new_event, MAX_TITLE_LEN};
