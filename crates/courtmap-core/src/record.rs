//! Canonical court record produced by the normaliser.

use serde::{Deserialize, Serialize};

use crate::aspect::Aspect;

/// Display name used when the payload carries no court name.
pub const DEFAULT_COURT_NAME: &str = "Неизвестный суд";

/// Display instance used when the payload carries no instantiation.
pub const DEFAULT_INSTANCE: &str = "Не указано";

/// Per-aspect averages. Every slot is always present; a missing source
/// aspect is an explicit `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub judge: f64,
    pub process: f64,
    pub staff: f64,
    pub office: f64,
    pub building: f64,
}

impl Assessment {
    pub fn get(&self, aspect: Aspect) -> f64 {
        match aspect {
            Aspect::Judge => self.judge,
            Aspect::Process => self.process,
            Aspect::Staff => self.staff,
            Aspect::Office => self.office,
            Aspect::Building => self.building,
        }
    }

    pub fn set(&mut self, aspect: Aspect, value: f64) {
        let slot = match aspect {
            Aspect::Judge => &mut self.judge,
            Aspect::Process => &mut self.process,
            Aspect::Staff => &mut self.staff,
            Aspect::Office => &mut self.office,
            Aspect::Building => &mut self.building,
        };
        *slot = value;
    }

    /// `(aspect, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Aspect, f64)> + '_ {
        Aspect::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// A court with its survey results, resolved to strict types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtRecord {
    pub id: i64,
    pub name: String,
    pub instance: String,
    pub overall_assessment: f64,
    pub assessment: Assessment,
    pub total_survey_responses: u64,
}
