//! Canonical survey aspects and the locale label dictionary that maps onto them.
//!
//! The survey backend reports per-aspect averages under Russian display
//! labels (`"Судья"`, `"Здание"`, ...). Internally every aspect is one of
//! five fixed, locale-independent keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five rated dimensions of a court visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Judge,
    Process,
    Staff,
    Office,
    Building,
}

impl Aspect {
    /// All aspects in table column order.
    pub const ALL: [Aspect; 5] = [
        Aspect::Judge,
        Aspect::Process,
        Aspect::Staff,
        Aspect::Office,
        Aspect::Building,
    ];

    /// Map a locale label to its canonical aspect, ignoring case.
    ///
    /// Returns `None` for anything outside the dictionary; callers skip
    /// such entries without discarding the rest of the record.
    pub fn classify(label: &str) -> Option<Aspect> {
        let lower = label.to_lowercase();
        Aspect::ALL
            .into_iter()
            .find(|aspect| aspect.locale_label() == lower)
    }

    /// Canonical key as used in serialised records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Judge => "judge",
            Self::Process => "process",
            Self::Staff => "staff",
            Self::Office => "office",
            Self::Building => "building",
        }
    }

    /// Lowercase label the survey backend uses for this aspect.
    pub fn locale_label(&self) -> &'static str {
        match self {
            Self::Judge => "судья",
            Self::Process => "процесс",
            Self::Staff => "сотрудники",
            Self::Office => "канцелярия",
            Self::Building => "здание",
        }
    }

    /// Column heading for tables.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Judge => "Судья",
            Self::Process => "Процесс",
            Self::Staff => "Сотрудники",
            Self::Office => "Канцелярия",
            Self::Building => "Здание",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
