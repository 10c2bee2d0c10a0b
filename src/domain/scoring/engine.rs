//! The maturity scoring computation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, Percentage};

use super::{AppliedPattern, PatternCatalogEntry, ScoreRecord};

/// How the overall score is derived from the per-category scores.
///
/// The product has always shown users rounded per-category numbers and an
/// overall that averages those already-rounded numbers. Averaging the raw
/// ratios first diverges by up to a few points, so both policies exist and
/// the legacy one is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Overall = rounded mean of the rounded per-category percentages.
    #[default]
    RoundThenAverage,
    /// Overall = rounded mean of the raw achieved/total ratios.
    AverageThenRound,
}

/// Aggregates achieved vs. available weighted points into a [`ScoreRecord`].
///
/// Every catalog pattern contributes its fixed weight to its category's
/// denominator whether or not it was applied; applied patterns contribute
/// their earned points to the numerator. An optional category filter scopes
/// both sides. Categories with zero available weight are omitted entirely,
/// so an empty catalog yields the empty record, never NaN.
pub fn compute_scores(
    catalog: &[PatternCatalogEntry],
    applied: &[AppliedPattern],
    category_filter: Option<&[Category]>,
    rounding: RoundingPolicy,
) -> ScoreRecord {
    let in_scope = |category: Option<Category>| -> Option<Category> {
        let category = category?;
        match category_filter {
            Some(filter) if !filter.contains(&category) => None,
            _ => Some(category),
        }
    };

    let mut achieved: BTreeMap<Category, f64> = BTreeMap::new();
    let mut total: BTreeMap<Category, f64> = BTreeMap::new();

    for pattern in catalog {
        if let Some(category) = in_scope(pattern.category) {
            *total.entry(category).or_insert(0.0) += pattern.weight;
        }
    }

    for application in applied {
        if let Some(category) = in_scope(application.category) {
            *achieved.entry(category).or_insert(0.0) += application.points;
        }
    }

    let mut per_category = BTreeMap::new();
    let mut raw_ratios = Vec::new();

    for (category, total_weight) in &total {
        if *total_weight <= 0.0 {
            continue;
        }
        let points = achieved.get(category).copied().unwrap_or(0.0);
        per_category.insert(*category, Percentage::from_ratio(points, *total_weight));
        raw_ratios.push(points / total_weight * 100.0);
    }

    if per_category.is_empty() {
        return ScoreRecord::empty();
    }

    let overall = match rounding {
        RoundingPolicy::RoundThenAverage => {
            let sum: f64 = per_category.values().map(|p| f64::from(p.value())).sum();
            Percentage::new((sum / per_category.len() as f64).round() as u8)
        }
        RoundingPolicy::AverageThenRound => {
            let sum: f64 = raw_ratios.iter().sum();
            Percentage::new((sum / raw_ratios.len() as f64).round().clamp(0.0, 100.0) as u8)
        }
    };

    ScoreRecord { per_category, overall }
}
