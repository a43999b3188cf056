use thiserror::Error;

/// Failures raised while turning raw survey payloads into canonical records.
///
/// None of these escape the pipeline's public contracts: [`crate::normalize`]
/// and [`crate::build`] log them and shrink the dataset instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurveyError {
    #[error("malformed response: missing '{key}' collection")]
    MalformedResponse { key: String },

    #[error("malformed record (court_id={}): {reason}", display_id(.court_id))]
    MalformedRecord {
        court_id: Option<i64>,
        reason: String,
    },

    #[error("malformed aspect entry #{index}: {reason}")]
    MalformedAspectEntry { index: usize, reason: String },

    #[error("invalid reporting period: {0}")]
    InvalidPeriod(String),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
}

fn display_id(id: &Option<i64>) -> String {
    id.map_or_else(|| "?".to_string(), |id| id.to_string())
}

impl SurveyError {
    pub(crate) fn record(court_id: Option<i64>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            court_id,
            reason: reason.into(),
        }
    }
}
