//! Event categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ExplorerError;

/// Closed set of event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Music,
    Food,
    Art,
    Sports,
    Networking,
    Business,
    Education,
    Health,
    Entertainment,
}

impl Category {
    /// Every category, in the order the category tabs list them
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Music,
        Category::Food,
        Category::Art,
        Category::Sports,
        Category::Networking,
        Category::Business,
        Category::Education,
        Category::Health,
        Category::Entertainment,
    ];

    /// Display name, also the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Music => "Music",
            Category::Food => "Food",
            Category::Art => "Art",
            Category::Sports => "Sports",
            Category::Networking => "Networking",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExplorerError;

    /// Case-insensitive parse of a display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExplorerError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("music".parse::<Category>().unwrap(), Category::Music);
        assert_eq!(" TECHNOLOGY ".parse::<Category>().unwrap(), Category::Technology);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "Gardening".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Gardening"));
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
        assert!(serde_json::from_str::<Category>("\"Cooking\"").is_err());
    }
}
