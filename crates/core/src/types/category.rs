//! Product category enum.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product category.
///
/// The café menu groups products into four fixed categories. Chai tea is
/// filed under `Coffee` with the rest of the hot drinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Food,
    Dessert,
    Merchandise,
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, Error)]
#[error("unknown category: {0} (expected coffee, food, dessert, or merchandise)")]
pub struct CategoryParseError(String);

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Self; 4] = [Self::Coffee, Self::Food, Self::Dessert, Self::Merchandise];

    /// The lowercase name used in persisted snapshots and URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Food => "food",
            Self::Dessert => "dessert",
            Self::Merchandise => "merchandise",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "food" => Ok(Self::Food),
            "dessert" => Ok(Self::Dessert),
            "merchandise" => Ok(Self::Merchandise),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}
