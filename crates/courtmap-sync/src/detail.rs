//! Detail fetch seam for the selection coordinator.

use std::fmt;

use async_trait::async_trait;
use courtmap_core::{CourtRecord, Resolution, SelectionCoordinator};
use serde_json::Value;
use tracing::debug;

/// Anything that can retrieve a court's detailed survey results.
///
/// The bearer token is passed per call; implementations hold no ambient
/// credentials.
#[async_trait]
pub trait DetailSource: Send + Sync {
    type Error: fmt::Display + Send;

    async fn fetch_detail(
        &self,
        court_id: i64,
        year: i32,
        token: &str,
    ) -> Result<Value, Self::Error>;
}

/// Select `court`, fetch its detail and apply the outcome.
///
/// Returns `None` without fetching when the coordinator ignores the
/// selection (a fetch already in flight or a detail view open).
pub async fn open_detail<S>(
    selection: &mut SelectionCoordinator,
    court: &CourtRecord,
    source: &S,
    year: i32,
    token: &str,
) -> Option<Resolution>
where
    S: DetailSource + ?Sized,
{
    let request = selection.select(court)?;
    debug!(court_id = request.court_id, year, "fetching court detail");
    let outcome = source.fetch_detail(request.court_id, year, token).await;
    Some(selection.resolve(request.ticket, outcome))
}
