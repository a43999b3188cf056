//! Table ordering for court datasets.
//!
//! Sorting is a pure function of `(records, SortSpec)`: the input slice is
//! never reordered, the result borrows from it, and ties keep input order.
//!
//! # Zero sentinel
//!
//! A score of exactly `0` means "no data yet" and is ranked as negative
//! infinity, below every measured value. Zero-valued records therefore sit
//! at the low extreme: first when ascending, last when descending. A court
//! that genuinely scored `0` can't be told apart from one with no responses.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aspect::Aspect;
use crate::error::SurveyError;
use crate::record::CourtRecord;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Row number column. Display-only.
    Number,
    /// Court name column. Display-only.
    Name,
    Overall,
    Judge,
    Process,
    Staff,
    Office,
    Building,
    /// Total survey responses.
    Count,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::Number,
        SortField::Name,
        SortField::Overall,
        SortField::Judge,
        SortField::Process,
        SortField::Staff,
        SortField::Office,
        SortField::Building,
        SortField::Count,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Overall => "overall",
            Self::Judge => "judge",
            Self::Process => "process",
            Self::Staff => "staff",
            Self::Office => "office",
            Self::Building => "building",
            Self::Count => "count",
        }
    }

    /// The aspect this column shows, if it is one of the five aspect columns.
    pub fn aspect(&self) -> Option<Aspect> {
        match self {
            Self::Judge => Some(Aspect::Judge),
            Self::Process => Some(Aspect::Process),
            Self::Staff => Some(Aspect::Staff),
            Self::Office => Some(Aspect::Office),
            Self::Building => Some(Aspect::Building),
            Self::Number | Self::Name | Self::Overall | Self::Count => None,
        }
    }

    /// Numeric value this column compares on, or `None` for the display-only
    /// `number` and `name` columns.
    pub fn numeric_value(&self, record: &CourtRecord) -> Option<f64> {
        match self {
            Self::Overall => Some(record.overall_assessment),
            Self::Count => Some(record.total_survey_responses as f64),
            Self::Number | Self::Name => None,
            Self::Judge | Self::Process | Self::Staff | Self::Office | Self::Building => {
                self.aspect().map(|a| record.assessment.get(a))
            }
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| SurveyError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header arrow.
    pub fn indicator(&self) -> char {
        match self {
            Self::Ascending => '↑',
            Self::Descending => '↓',
        }
    }
}

/// Active sort column and direction. `None` in either slot means unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction: Some(direction),
        }
    }

    /// Apply a header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = Some(match self.direction {
                Some(SortDirection::Ascending) => SortDirection::Descending,
                _ => SortDirection::Ascending,
            });
        } else {
            self.field = Some(field);
            self.direction = Some(SortDirection::Ascending);
        }
    }

    /// Header arrow for `field`, shown only on the active column.
    pub fn indicator(&self, field: SortField) -> Option<char> {
        match (self.field, self.direction) {
            (Some(active), Some(direction)) if active == field => Some(direction.indicator()),
            _ => None,
        }
    }
}

/// Order `records` by `spec`.
///
/// Returns input order unchanged when the spec is unset or names a
/// display-only column; use [`sort_with`] for those.
pub fn sorted<'a>(records: &'a [CourtRecord], spec: &SortSpec) -> Vec<&'a CourtRecord> {
    let mut out: Vec<&CourtRecord> = records.iter().collect();
    let (Some(field), Some(direction)) = (spec.field, spec.direction) else {
        return out;
    };
    if matches!(field, SortField::Number | SortField::Name) {
        return out;
    }

    out.sort_by(|a, b| {
        let av = field.numeric_value(a).unwrap_or(0.0);
        let bv = field.numeric_value(b).unwrap_or(0.0);
        compare_scores(av, bv, direction)
    });
    out
}

/// Order `records` with a caller-supplied ascending comparator.
///
/// Same guarantees as [`sorted`]: stable, non-mutating.
pub fn sort_with<'a, F>(
    records: &'a [CourtRecord],
    direction: SortDirection,
    mut compare: F,
) -> Vec<&'a CourtRecord>
where
    F: FnMut(&CourtRecord, &CourtRecord) -> Ordering,
{
    let mut out: Vec<&CourtRecord> = records.iter().collect();
    out.sort_by(|a, b| match direction {
        SortDirection::Ascending => compare(a, b),
        SortDirection::Descending => compare(b, a),
    });
    out
}

/// Compare two scores with the zero sentinel applied.
pub fn compare_scores(a: f64, b: f64, direction: SortDirection) -> Ordering {
    let (a, b) = (sentinel(a), sentinel(b));
    match direction {
        SortDirection::Ascending => a.total_cmp(&b),
        SortDirection::Descending => b.total_cmp(&a),
    }
}

fn sentinel(value: f64) -> f64 {
    if value == 0.0 {
        f64::NEG_INFINITY
    } else {
        value
    }
}
