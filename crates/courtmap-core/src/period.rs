//! Reporting periods for survey results.
//!
//! A period is an inclusive date range. It is usually a whole year, a
//! quarter or a month. The detail endpoint only takes a year, which comes
//! from [`ReportingPeriod::year`].
//!
//! Textual forms accepted by [`str::parse`]:
//!
//! - `2025` (whole year)
//! - `2025-Q2` or `2025-II` (quarter)
//! - `2025-03` (month)
//! - `2025-01-01..2025-01-15` (explicit range)

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;

/// Year the survey backend serves by default.
pub const DEFAULT_YEAR: i32 = 2025;

pub const QUARTER_LABELS: [&str; 4] = ["I", "II", "III", "IV"];

pub const MONTH_LABELS: [&str; 12] = [
    "янв.", "фев.", "мар.", "апр.", "май", "июн.", "июл.", "авг.", "сен.", "окт.", "ноя.", "дек.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    /// An explicit range; `start` must not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SurveyError> {
        if start > end {
            return Err(SurveyError::InvalidPeriod(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn whole_year(year: i32) -> Result<Self, SurveyError> {
        Self::new(date(year, 1, 1)?, date(year, 12, 31)?)
    }

    /// Quarter `1..=4` of `year`.
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, SurveyError> {
        if !(1..=4).contains(&quarter) {
            return Err(SurveyError::InvalidPeriod(format!("quarter {quarter} out of range")));
        }
        let first_month = (quarter - 1) * 3 + 1;
        Self::new(date(year, first_month, 1)?, month_end(year, first_month + 2)?)
    }

    /// Month `1..=12` of `year`.
    pub fn month(year: i32, month: u32) -> Result<Self, SurveyError> {
        if !(1..=12).contains(&month) {
            return Err(SurveyError::InvalidPeriod(format!("month {month} out of range")));
        }
        Self::new(date(year, month, 1)?, month_end(year, month)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Year parameter for detail requests.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for ReportingPeriod {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || SurveyError::InvalidPeriod(format!("cannot parse '{s}'"));

        if let Some((start, end)) = s.split_once("..") {
            let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
            let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
            return Self::new(start, end);
        }

        let Some((year, rest)) = s.split_once('-') else {
            return Self::whole_year(s.parse().map_err(|_| invalid())?);
        };
        let year: i32 = year.parse().map_err(|_| invalid())?;

        if let Some(q) = rest.strip_prefix(['Q', 'q']) {
            return Self::quarter(year, q.parse().map_err(|_| invalid())?);
        }
        if let Some(q) = QUARTER_LABELS.iter().position(|label| *label == rest) {
            return Self::quarter(year, q as u32 + 1);
        }
        Self::month(year, rest.parse().map_err(|_| invalid())?)
    }
}

/// Display label for quarter `1..=4`.
pub fn quarter_label(quarter: u32) -> Option<&'static str> {
    QUARTER_LABELS.get(quarter.checked_sub(1)? as usize).copied()
}

/// Abbreviated display label for month `1..=12`.
pub fn month_label(month: u32) -> Option<&'static str> {
    MONTH_LABELS.get(month.checked_sub(1)? as usize).copied()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SurveyError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SurveyError::InvalidPeriod(format!("{year}-{month:02}-{day:02} is not a date")))
}

fn month_end(year: i32, month: u32) -> Result<NaiveDate, SurveyError> {
    let next = if month == 12 {
        date(year + 1, 1, 1)?
    } else {
        date(year, month + 1, 1)?
    };
    next.pred_opt()
        .ok_or_else(|| SurveyError::InvalidPeriod(format!("no day before {next}")))
}
