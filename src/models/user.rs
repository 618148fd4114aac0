use serde::{Deserialize, Serialize};
use std::fmt;

/// A completion percentage, clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);

    /// Build a percentage, saturating anything above 100.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Percent(100)
        } else {
            Percent(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, for gauges.
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<u8> for Percent {
    fn from(value: u8) -> Self {
        Percent::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The signed-in learner. Read-only for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub progress: Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_clamps_above_hundred() {
        assert_eq!(Percent::new(250).value(), 100);
        assert_eq!(Percent::from(101).value(), 100);
        assert_eq!(Percent::new(35).value(), 35);
    }

    #[test]
    fn test_percent_display_and_ratio() {
        assert_eq!(Percent::new(15).to_string(), "15%");
        assert!((Percent::new(50).ratio() - 0.5).abs() < f64::EPSILON);
        assert_eq!(Percent::ZERO.ratio(), 0.0);
    }

    #[test]
    fn test_percent_deserialize_clamps() {
        let p: Percent = serde_json::from_str("180").unwrap();
        assert_eq!(p.value(), 100);
    }
}
