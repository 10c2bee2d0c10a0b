//! Maturity scoring over the pattern catalog.

mod engine;
mod points;
mod record;

pub use engine::{compute_scores, RoundingPolicy};
pub use points::pattern_points;
pub use record::{AppliedPattern, PatternCatalogEntry, ScoreRecord, DEFAULT_PATTERN_WEIGHT};
