//! Dataset builder: full rayon API response in, ordered [`CourtRecord`]s out.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::SurveyError;
use crate::normalize::try_normalize;
use crate::record::CourtRecord;

/// Top-level key holding the court list in the rayon assessment response.
pub const RAYON_COURTS_KEY: &str = "rayon_courts";

/// Outcome of a dataset build, with counts for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    /// Surviving records in input order.
    pub records: Vec<CourtRecord>,
    /// Number of court entries in the response.
    pub received: usize,
    /// Entries rejected by the normaliser or as duplicate ids.
    pub dropped: usize,
}

/// Build the dataset, discarding unparsable courts.
///
/// A response without the court collection yields an empty dataset and an
/// error log; it never fails the caller.
pub fn build(response: &Value) -> Vec<CourtRecord> {
    match build_report(response) {
        Ok(report) => report.records,
        Err(e) => {
            error!(error = %e, "invalid API data format");
            Vec::new()
        }
    }
}

/// Build the dataset and report how many entries survived.
///
/// Returns [`SurveyError::MalformedResponse`] when the court collection is
/// absent or not a list, so callers can tell that apart from a valid but
/// empty response.
pub fn build_report(response: &Value) -> Result<BuildReport, SurveyError> {
    let courts = response
        .get(RAYON_COURTS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| SurveyError::MalformedResponse {
            key: RAYON_COURTS_KEY.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(courts.len());
    let mut records = Vec::with_capacity(courts.len());
    for raw in courts {
        let record = match try_normalize(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "dropping court record");
                continue;
            }
        };
        if !seen.insert(record.id) {
            warn!(court_id = record.id, "dropping court record with duplicate id");
            continue;
        }
        records.push(record);
    }

    let received = courts.len();
    let dropped = received - records.len();
    info!(received, kept = records.len(), dropped, "built court dataset");

    Ok(BuildReport {
        records,
        received,
        dropped,
    })
}
