//! Scoring configuration.

use serde::Deserialize;

use crate::domain::scoring::RoundingPolicy;

/// Scoring policy knobs.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringConfig {
    /// How the overall score is rounded. The legacy `round_then_average`
    /// is the default; `average_then_round` is numerically cleaner but
    /// diverges from what users see per category.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rounding_preserves_legacy_behavior() {
        let config = ScoringConfig::default();
        assert_eq!(config.rounding, RoundingPolicy::RoundThenAverage);
    }

    #[test]
    fn rounding_deserializes_from_snake_case() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"rounding":"average_then_round"}"#).unwrap();
        assert_eq!(config.rounding, RoundingPolicy::AverageThenRound);
    }
}
