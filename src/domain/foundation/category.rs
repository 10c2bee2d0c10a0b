//! Category enum - the fixed capability dimensions used for grouping
//! questions and bucketing maturity scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six capability dimensions of the coaching model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entrepreneur,
    Team,
    Stakeholders,
    Product,
    Sustainability,
    TimeSpace,
}

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Entrepreneur,
            Category::Team,
            Category::Stakeholders,
            Category::Product,
            Category::Sustainability,
            Category::TimeSpace,
        ]
    }

    /// Returns the snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entrepreneur => "entrepreneur",
            Category::Team => "team",
            Category::Stakeholders => "stakeholders",
            Category::Product => "product",
            Category::Sustainability => "sustainability",
            Category::TimeSpace => "time_space",
        }
    }

    /// Returns the human-facing label used in summaries and exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Entrepreneur => "The Entrepreneur",
            Category::Team => "Team & Collaboration",
            Category::Stakeholders => "Customers, Stakeholders, and Systems",
            Category::Product => "Truly, the best solution",
            Category::Sustainability => "Sustainability and responsibility",
            Category::TimeSpace => "Time and space",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrepreneur" => Ok(Category::Entrepreneur),
            "team" => Ok(Category::Team),
            "stakeholders" => Ok(Category::Stakeholders),
            "product" => Ok(Category::Product),
            "sustainability" => Ok(Category::Sustainability),
            "time_space" => Ok(Category::TimeSpace),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_six_categories_in_canonical_order() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Category::Entrepreneur);
        assert_eq!(all[5], Category::TimeSpace);
    }

    #[test]
    fn category_round_trips_through_wire_name() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn unknown_category_name_is_rejected() {
        let result: Result<Category, _> = "finance".parse();
        assert!(result.is_err());
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Category::TimeSpace).unwrap();
        assert_eq!(json, "\"time_space\"");
    }
}
