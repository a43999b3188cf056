//! Severity tiers for displaying scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the `Poor` tier.
pub const POOR_MAX: f64 = 2.0;

/// Upper bound (inclusive) of the `Fair` tier.
pub const FAIR_MAX: f64 = 3.5;

/// Display tier of a score. Presentation only; never feeds back into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Exactly zero: no data.
    Neutral,
    Poor,
    Fair,
    Good,
}

impl Rating {
    /// Classify a score. Negative scores are `Poor`; NaN is `Neutral`.
    pub fn classify(score: f64) -> Rating {
        if score == 0.0 || score.is_nan() {
            Rating::Neutral
        } else if score <= POOR_MAX {
            Rating::Poor
        } else if score <= FAIR_MAX {
            Rating::Fair
        } else {
            Rating::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
        }
    }

    /// Background class used to shade a table cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Neutral => "bg-gray-100",
            Self::Poor => "bg-red-100",
            Self::Fair => "bg-yellow-100",
            Self::Good => "bg-green-100",
        }
    }

    /// Single-character marker for terminal output.
    pub fn marker(&self) -> char {
        match self {
            Self::Neutral => ' ',
            Self::Poor => '!',
            Self::Fair => '~',
            Self::Good => '+',
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a score for a table cell: `0` stays `"0"`, anything else gets one decimal.
pub fn format_score(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(Rating::classify(0.0), Rating::Neutral);
        assert_eq!(Rating::classify(2.0), Rating::Poor);
        assert_eq!(Rating::classify(3.5), Rating::Fair);
        assert_eq!(Rating::classify(3.51), Rating::Good);
        assert_eq!(Rating::classify(-1.0), Rating::Poor);
    }

    #[test]
    fn interior_values() {
        assert_eq!(Rating::classify(0.01), Rating::Poor);
        assert_eq!(Rating::classify(2.01), Rating::Fair);
        assert_eq!(Rating::classify(5.0), Rating::Good);
        assert_eq!(Rating::classify(f64::INFINITY), Rating::Good);
        assert_eq!(Rating::classify(f64::NEG_INFINITY), Rating::Poor);
    }

    #[test]
    fn negative_zero_is_neutral() {
        assert_eq!(Rating::classify(-0.0), Rating::Neutral);
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(Rating::classify(f64::NAN), Rating::Neutral);
    }

    #[test]
    fn css_classes() {
        assert_eq!(Rating::Neutral.css_class(), "bg-gray-100");
        assert_eq!(Rating::Poor.css_class(), "bg-red-100");
        assert_eq!(Rating::Fair.css_class(), "bg-yellow-100");
        assert_eq!(Rating::Good.css_class(), "bg-green-100");
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(4.0), "4.0");
        assert_eq!(format_score(3.46), "3.5");
        assert_eq!(format_score(-1.26), "-1.3");
    }
}
