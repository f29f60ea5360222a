//! Grid, list and map renderings of a result list

use std::collections::BTreeMap;
use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Event, ExplorerError};

/// Shown instead of an empty result list
pub const EMPTY_NOTICE: &str =
    "No events found. Try adjusting your filters to discover more events.";

/// Presentation mode for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Map,
}

impl FromStr for ViewMode {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "map" => Ok(ViewMode::Map),
            other => Err(ExplorerError::UnknownOption {
                kind: "view mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Render `events` in `mode`, keeping their order
pub fn render(events: &[Event], mode: ViewMode) -> String {
    if events.is_empty() {
        return EMPTY_NOTICE.to_string();
    }
    match mode {
        ViewMode::Grid => render_grid(events),
        ViewMode::List => render_list(events),
        ViewMode::Map => render_map(events),
    }
}

fn render_grid(events: &[Event]) -> String {
    let mut out = format!("{} events found\n", events.len());
    for event in events {
        let _ = write!(
            out,
            "\n[{}] {}\n    {} {}\n    {}\n    {}\n",
            event.category, event.title, event.date, event.time, event.location, event.price
        );
    }
    out
}

fn render_list(events: &[Event]) -> String {
    let mut out = format!("{} events found\n", events.len());
    for event in events {
        let _ = writeln!(
            out,
            "{:>4}  {}  {:<30}  {:<14}  {:>8}  {}",
            event.id,
            event.date,
            event.title,
            event.category.as_str(),
            event.price.to_string(),
            event.location
        );
    }
    out
}

/// One pin per location, events listed under it in result order
fn render_map(events: &[Event]) -> String {
    let mut pins: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for event in events {
        pins.entry(event.location.trim()).or_default().push(event);
    }

    let mut out = format!("{} events at {} locations\n", events.len(), pins.len());
    for (location, here) in pins {
        let _ = writeln!(out, "\n@ {} ({})", location, here.len());
        for event in here {
            let _ = writeln!(out, "  - {} on {} ({})", event.title, event.date, event.price);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, NewEvent, Price};

    fn events() -> Vec<Event> {
        vec![
            NewEvent::new(
                "Tech Conference",
                "2025-06-15",
                "Kathmandu",
                Category::Technology,
                Price::Amount(2500.0),
            )
            .into_event("1".into()),
            NewEvent::new("Music Fest", "2025-07-22", "Kathmandu", Category::Music, Price::Free)
                .into_event("2".into()),
            NewEvent::new("Art Walk", "2025-05-01", "Patan", Category::Art, Price::Amount(15.0))
                .into_event("3".into()),
        ]
    }

    #[test]
    fn test_empty_results_show_notice() {
        for mode in [ViewMode::Grid, ViewMode::List, ViewMode::Map] {
            assert_eq!(render(&[], mode), EMPTY_NOTICE);
        }
    }

    #[test]
    fn test_grid_keeps_order() {
        let out = render(&events(), ViewMode::Grid);
        assert!(out.starts_with("3 events found"));
        let tech = out.find("Tech Conference").unwrap();
        let art = out.find("Art Walk").unwrap();
        assert!(tech < art);
        assert!(out.contains("Free"));
    }

    #[test]
    fn test_list_has_one_row_per_event() {
        let out = render(&events(), ViewMode::List);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_map_groups_by_location() {
        let out = render(&events(), ViewMode::Map);
        assert!(out.starts_with("3 events at 2 locations"));
        assert!(out.contains("@ Kathmandu (2)"));
        assert!(out.contains("@ Patan (1)"));
    }

    #[test]
    fn test_parse_view_mode() {
        assert_eq!("MAP".parse::<ViewMode>().unwrap(), ViewMode::Map);
        assert!("calendar".parse::<ViewMode>().is_err());
    }
}
