//! Input rules for event records

use crate::types::{parse_date, Event, ExplorerError, ExplorerResult, NewEvent};

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 200;

fn check_title(title: &str) -> ExplorerResult<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ExplorerError::Validation("title must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ExplorerError::Validation(format!(
            "title longer than {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}

/// Hard checks for event data before it is stored
pub fn validate_new_event(event: &NewEvent) -> ExplorerResult<()> {
    check_title(&event.title)
}

/// Hard checks for a stored record after an update is merged
pub fn validate_event(event: &Event) -> ExplorerResult<()> {
    check_title(&event.title)
}

/// Check if a date is ISO 8601, return warning if not.
///
/// Such dates are stored anyway; date filters never match them.
pub fn validate_date(date: &str) -> Option<String> {
    if parse_date(date).is_some() {
        None
    } else {
        Some(format!(
            "⚠️ Date '{}' is not YYYY-MM-DD; the event will be excluded from date filters",
            date
        ))
    }
}
