//! Scoring inputs and the computed maturity record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, PatternId, Percentage, Timestamp};

/// Fixed denominator weight every catalog pattern contributes to its
/// category, independent of whether the subject applied it.
pub const DEFAULT_PATTERN_WEIGHT: f64 = 5.0;

/// One best-practice pattern in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCatalogEntry {
    pub id: PatternId,
    pub name: String,
    /// Uncategorized patterns exist in the catalog but never score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub weight: f64,
}

impl PatternCatalogEntry {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: PatternId::new(),
            name: name.into(),
            category: Some(category),
            weight: DEFAULT_PATTERN_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// A pattern the subject has applied, with the points it earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedPattern {
    pub pattern_id: PatternId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub points: f64,
    pub applied_at: Timestamp,
}

impl AppliedPattern {
    pub fn new(pattern: &PatternCatalogEntry, points: f64) -> Self {
        Self {
            pattern_id: pattern.id,
            category: pattern.category,
            points,
            applied_at: Timestamp::now(),
        }
    }
}

/// Per-category and overall maturity percentages.
///
/// Categories with zero total available weight are absent from
/// `per_category` (not rendered as 0%) and excluded from `overall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub per_category: BTreeMap<Category, Percentage>,
    pub overall: Percentage,
}

impl ScoreRecord {
    /// The empty record: no scorable categories, overall zero.
    pub fn empty() -> Self {
        Self {
            per_category: BTreeMap::new(),
            overall: Percentage::ZERO,
        }
    }
}
