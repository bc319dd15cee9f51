//! Scale input coercion - raw caller values to decision-scale numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rating::{Rating, SCALE_NEUTRAL};

/// A raw cell value as supplied by the caller.
///
/// Kept alongside the coerced number so reports can echo what was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleInput {
    Number(f64),
    Label(String),
    Missing,
}

impl ScaleInput {
    /// Coerces the input to a scale value.
    ///
    /// Finite numbers pass through unclamped. Text is tried as a number first,
    /// then as a qualitative label. Everything else is neutral (5.0).
    pub fn to_scale(&self) -> f64 {
        match self {
            ScaleInput::Number(n) if n.is_finite() => *n,
            ScaleInput::Number(_) => SCALE_NEUTRAL,
            ScaleInput::Label(text) => {
                let trimmed = text.trim();
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    _ => trimmed
                        .parse::<Rating>()
                        .map(|r| r.scale_value())
                        .unwrap_or(SCALE_NEUTRAL),
                }
            }
            ScaleInput::Missing => SCALE_NEUTRAL,
        }
    }

    /// Returns true if the input was given as a qualitative label.
    pub fn is_label(&self) -> bool {
        match self {
            ScaleInput::Label(text) => text.trim().parse::<Rating>().is_ok(),
            _ => false,
        }
    }
}

impl Default for ScaleInput {
    fn default() -> Self {
        ScaleInput::Missing
    }
}

impl From<f64> for ScaleInput {
    fn from(value: f64) -> Self {
        ScaleInput::Number(value)
    }
}

impl From<&str> for ScaleInput {
    fn from(value: &str) -> Self {
        ScaleInput::Label(value.to_string())
    }
}

impl fmt::Display for ScaleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleInput::Number(n) => write!(f, "{}", format_number(*n)),
            ScaleInput::Label(text) => write!(f, "{}", text.trim()),
            ScaleInput::Missing => write!(f, "n/a"),
        }
    }
}

/// Formats a number without a trailing ".0" for whole values.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pass_through_unclamped() {
        assert_eq!(ScaleInput::Number(100.0).to_scale(), 100.0);
        assert_eq!(ScaleInput::Number(-2.5).to_scale(), -2.5);
        assert_eq!(ScaleInput::Number(7.0).to_scale(), 7.0);
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(ScaleInput::from(" 42 ").to_scale(), 42.0);
        assert_eq!(ScaleInput::from("3.5").to_scale(), 3.5);
    }

    #[test]
    fn labels_map_to_scale() {
        assert_eq!(ScaleInput::from("very low").to_scale(), 1.0);
        assert_eq!(ScaleInput::from("Low").to_scale(), 3.0);
        assert_eq!(ScaleInput::from(" medium ").to_scale(), 5.0);
        assert_eq!(ScaleInput::from("HIGH").to_scale(), 7.0);
        assert_eq!(ScaleInput::from("very high").to_scale(), 9.0);
    }

    #[test]
    fn unknown_input_defaults_to_neutral() {
        assert_eq!(ScaleInput::from("excellent").to_scale(), 5.0);
        assert_eq!(ScaleInput::from("").to_scale(), 5.0);
        assert_eq!(ScaleInput::Missing.to_scale(), 5.0);
        assert_eq!(ScaleInput::Number(f64::NAN).to_scale(), 5.0);
        assert_eq!(ScaleInput::Number(f64::INFINITY).to_scale(), 5.0);
        assert_eq!(ScaleInput::from("inf").to_scale(), 5.0);
    }

    #[test]
    fn is_label_only_for_known_labels() {
        assert!(ScaleInput::from("High").is_label());
        assert!(!ScaleInput::from("12").is_label());
        assert!(!ScaleInput::Number(7.0).is_label());
    }

    #[test]
    fn deserializes_numbers_labels_and_null() {
        let values: Vec<ScaleInput> = serde_json::from_str(r#"[100, "high", null, 2.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ScaleInput::Number(100.0),
                ScaleInput::Label("high".to_string()),
                ScaleInput::Missing,
                ScaleInput::Number(2.5),
            ]
        );
    }

    #[test]
    fn displays_as_entered() {
        assert_eq!(ScaleInput::Number(100.0).to_string(), "100");
        assert_eq!(ScaleInput::Number(2.5).to_string(), "2.5");
        assert_eq!(ScaleInput::from(" High ").to_string(), "High");
        assert_eq!(ScaleInput::Missing.to_string(), "n/a");
    }
}
