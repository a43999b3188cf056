//! Court survey assessment pipeline.
//!
//! Raw rayon API JSON → [`build`] (via [`normalize`] and [`Aspect::classify`])
//! → `Vec<CourtRecord>` → [`sorted`] → [`Rating::classify`] per cell for
//! display → [`SelectionCoordinator`] for drill-down.

pub mod aspect;
pub mod dataset;
pub mod error;
pub mod normalize;
pub mod period;
pub mod rating;
pub mod record;
pub mod selection;
pub mod sort;

pub use aspect::Aspect;
pub use dataset::{BuildReport, RAYON_COURTS_KEY, build, build_report};
pub use error::SurveyError;
pub use normalize::{normalize, try_normalize};
pub use period::ReportingPeriod;
pub use rating::{Rating, format_score};
pub use record::{Assessment, CourtRecord};
pub use selection::{DetailRequest, RequestTicket, Resolution, SelectionCoordinator, SelectionState};
pub use sort::{SortDirection, SortField, SortSpec, sort_with, sorted};
