//! Ticket price: either "Free" or a non-negative amount

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ExplorerError;

/// Literal token for free events
pub const FREE_TOKEN: &str = "Free";

/// Event price.
///
/// On the wire a price is always a string (`"Free"` or `"2500"`). Bare JSON
/// numbers are accepted on input for convenience.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "String")]
pub enum Price {
    #[default]
    Free,
    Amount(f64),
}

impl Price {
    /// Numeric value used for range checks and sorting; Free counts as 0
    pub fn value(&self) -> f64 {
        match self {
            Price::Free => 0.0,
            Price::Amount(amount) => *amount,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Price::Free)
    }

    /// Total order on the numeric value
    pub fn cmp_value(&self, other: &Price) -> Ordering {
        self.value().total_cmp(&other.value())
    }

    fn from_amount(amount: f64, original: &str) -> Result<Self, ExplorerError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Price::Amount(amount))
        } else {
            Err(ExplorerError::InvalidPrice(original.to_string()))
        }
    }
}

impl FromStr for Price {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(FREE_TOKEN) {
            return Ok(Price::Free);
        }
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| ExplorerError::InvalidPrice(s.to_string()))?;
        Price::from_amount(amount, s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => f.write_str(FREE_TOKEN),
            Price::Amount(amount) if amount.fract() == 0.0 && *amount < 1e15 => {
                write!(f, "{:.0}", amount)
            }
            Price::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Text(String),
    Number(f64),
}

impl TryFrom<PriceRepr> for Price {
    type Error = ExplorerError;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Text(text) => text.parse(),
            PriceRepr::Number(n) => Price::from_amount(n, &n.to_string()),
        }
    }
}
