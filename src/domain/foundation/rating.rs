//! Qualitative rating on the 1-9 decision scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lowest value on the decision scale.
pub const SCALE_MIN: f64 = 1.0;

/// Highest value on the decision scale.
pub const SCALE_MAX: f64 = 9.0;

/// Neutral value used when input cannot be interpreted.
pub const SCALE_NEUTRAL: f64 = 5.0;

/// Qualitative rating: "very low" (1) to "very high" (9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rating {
    VeryLow = 1,
    Low = 3,
    #[default]
    Medium = 5,
    High = 7,
    VeryHigh = 9,
}

impl Rating {
    /// Returns the scale value for this rating.
    pub fn scale_value(&self) -> f64 {
        f64::from(*self as u8)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryLow => "very low",
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
            Rating::VeryHigh => "very high",
        }
    }

    /// Maps a scale value back to the nearest rating band.
    ///
    /// The value is rounded to the nearest integer and clamped to 1-9:
    /// 1-2 very low, 3-4 low, 5-6 medium, 7-8 high, 9 very high.
    pub fn from_scale(value: f64) -> Self {
        if value.is_nan() {
            return Rating::Medium;
        }
        let step = value.round().clamp(SCALE_MIN, SCALE_MAX) as u8;
        match step {
            1 | 2 => Rating::VeryLow,
            3 | 4 => Rating::Low,
            5 | 6 => Rating::Medium,
            7 | 8 => Rating::High,
            _ => Rating::VeryHigh,
        }
    }

    /// Returns true if the value sits on the 1-9 scale.
    pub fn is_on_scale(value: f64) -> bool {
        (SCALE_MIN..=SCALE_MAX).contains(&value)
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    /// Parses a label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "very low" => Ok(Rating::VeryLow),
            "low" => Ok(Rating::Low),
            "medium" => Ok(Rating::Medium),
            "high" => Ok(Rating::High),
            "very high" => Ok(Rating::VeryHigh),
            _ => Err(ValidationError::invalid_format(
                "rating",
                format!("unknown label '{}'", normalized),
            )),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
