//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage from a raw achieved/total ratio, rounding to the
    /// nearest whole percent.
    ///
    /// Callers must guard `total > 0`; a non-positive total yields zero
    /// rather than NaN.
    pub fn from_ratio(achieved: f64, total: f64) -> Self {
        if total <= 0.0 {
            return Self::ZERO;
        }
        let pct = (achieved / total * 100.0).round();
        Self(pct.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_from_ratio_rounds_to_nearest() {
        assert_eq!(Percentage::from_ratio(3.0, 5.0).value(), 60);
        assert_eq!(Percentage::from_ratio(1.0, 3.0).value(), 33);
        assert_eq!(Percentage::from_ratio(2.0, 3.0).value(), 67);
    }

    #[test]
    fn percentage_from_ratio_guards_zero_total() {
        assert_eq!(Percentage::from_ratio(3.0, 0.0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(3.0, -1.0), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_plain_number() {
        let pct = Percentage::new(42);
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
    }
}
