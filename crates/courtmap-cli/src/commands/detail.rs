use std::path::PathBuf;

use anyhow::Context;
use courtmap_core::{ReportingPeriod, Resolution, SelectionCoordinator, SelectionState};
use courtmap_sync::open_detail;
use tracing::info;

use crate::config::Settings;
use crate::display;

pub async fn run(
    settings: &Settings,
    court_id: i64,
    input: Option<PathBuf>,
    period: Option<ReportingPeriod>,
) -> anyhow::Result<()> {
    let token = settings.require_token()?;
    let period = match period {
        Some(p) => p,
        None => ReportingPeriod::whole_year(settings.year)?,
    };

    let records = super::load_dataset(settings, input.as_deref()).await?;
    let court = records
        .iter()
        .find(|r| r.id == court_id)
        .with_context(|| format!("court {court_id} is not in the rayon dataset"))?;

    let client = super::client(settings);
    let mut selection = SelectionCoordinator::new();
    let resolution = open_detail(&mut selection, court, &client, period.year(), token).await;

    match (resolution, selection.state()) {
        (
            Some(Resolution::Shown),
            SelectionState::DetailVisible {
                court_name, detail, ..
            },
        ) => print!("{}", display::render_detail(court_name, detail)),
        // Failures were logged by the coordinator; the detail view just stays closed.
        _ => info!(court_id, "no detail to show"),
    }
    Ok(())
}
