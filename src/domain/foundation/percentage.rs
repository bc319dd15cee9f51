//! Percentage value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive, carried as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new Percentage, clamping to valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Percentage from a fraction in [0, 1].
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a copy rounded to the given number of decimal places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self(round_to(self.0, decimals))
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

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0.0).value(), 0.0);
        assert_eq!(Percentage::new(42.5).value(), 42.5);
        assert_eq!(Percentage::new(100.0).value(), 100.0);
    }

    #[test]
    fn percentage_new_clamps_to_range() {
        assert_eq!(Percentage::new(101.0).value(), 100.0);
        assert_eq!(Percentage::new(-3.0).value(), 0.0);
        assert_eq!(Percentage::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn percentage_from_fraction_converts() {
        assert!((Percentage::from_fraction(0.25).value() - 25.0).abs() < 1e-12);
        assert_eq!(Percentage::from_fraction(1.5).value(), 100.0);
    }

    #[test]
    fn percentage_rounds_to_decimals() {
        assert_eq!(Percentage::new(33.3333).rounded(1).value(), 33.3);
        assert_eq!(Percentage::new(44.44444).rounded(2).value(), 44.44);
        assert_eq!(round_to(0.66666, 4), 0.6667);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75.5)), "75.5%");
        assert_eq!(format!("{}", Percentage::from_fraction(1.0)), "100%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::new(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }
}
