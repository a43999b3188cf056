//! Sync layer: bearer-token HTTP access to the survey API and the detail
//! fetch seam the selection coordinator is driven through.

pub mod detail;

#[cfg(feature = "http")]
pub mod http;

pub use detail::{DetailSource, open_detail};

#[cfg(feature = "http")]
pub use http::{SurveyClient, SyncError};
