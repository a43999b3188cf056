//! Record normaliser: one raw court payload in, one [`CourtRecord`] out.
//!
//! Raw payloads are loosely typed JSON of the shape
//!
//! ```json
//! { "court_id": 7, "court": "...", "instantiation": "...",
//!   "overall_assessment": 3.9, "total_survey_responses": 41,
//!   "assessment": [ { "aspect": "Судья", "court_avg": 4.1 }, ... ] }
//! ```
//!
//! Failures are contained at the smallest scope: a bad aspect entry is
//! skipped, a bad record is rejected, siblings are never affected.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::aspect::Aspect;
use crate::error::SurveyError;
use crate::record::{Assessment, CourtRecord, DEFAULT_COURT_NAME, DEFAULT_INSTANCE};

/// Normalise one raw court payload, logging and discarding it on failure.
pub fn normalize(raw: &Value) -> Option<CourtRecord> {
    match try_normalize(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, "dropping court record");
            None
        }
    }
}

/// Normalise one raw court payload.
///
/// The record is rejected when it is not an object, has no aspect list,
/// or has no integer `court_id`. Everything else is defaulted.
pub fn try_normalize(raw: &Value) -> Result<CourtRecord, SurveyError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| SurveyError::record(None, "payload is not an object"))?;
    let court_id = obj.get("court_id").and_then(Value::as_i64);

    let entries = obj
        .get("assessment")
        .and_then(Value::as_array)
        .ok_or_else(|| SurveyError::record(court_id, "missing or non-list 'assessment'"))?;

    let id = court_id.ok_or_else(|| SurveyError::record(None, "missing or non-integer 'court_id'"))?;

    let mut assessment = Assessment::default();
    for (index, entry) in entries.iter().enumerate() {
        match read_aspect_entry(index, entry) {
            // Later duplicates overwrite earlier ones.
            Ok(Some((aspect, avg))) => assessment.set(aspect, avg),
            Ok(None) => debug!(court_id = id, index, "skipping unrecognised aspect label"),
            Err(e) => warn!(court_id = id, error = %e, "skipping aspect entry"),
        }
    }

    Ok(CourtRecord {
        id,
        name: text_or(obj, "court", DEFAULT_COURT_NAME),
        instance: text_or(obj, "instantiation", DEFAULT_INSTANCE),
        overall_assessment: obj
            .get("overall_assessment")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        assessment,
        total_survey_responses: count_or_zero(obj.get("total_survey_responses")),
    })
}

/// Validate one `{aspect, court_avg}` entry.
///
/// `Ok(None)` means the entry is well-formed but its label is not one of
/// the five known aspects.
fn read_aspect_entry(index: usize, entry: &Value) -> Result<Option<(Aspect, f64)>, SurveyError> {
    let invalid = |reason: &str| SurveyError::MalformedAspectEntry {
        index,
        reason: reason.to_string(),
    };

    let obj = entry.as_object().ok_or_else(|| invalid("entry is not an object"))?;
    let label = obj
        .get("aspect")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("empty or non-string 'aspect'"))?;
    let avg = obj
        .get("court_avg")
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid("non-numeric 'court_avg'"))?;

    Ok(Aspect::classify(label).map(|aspect| (aspect, avg)))
}

fn text_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn count_or_zero(value: Option<&Value>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    value.as_u64().unwrap_or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n > 0.0)
            .map_or(0, |n| n.trunc() as u64)
    })
}
