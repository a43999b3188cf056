pub mod detail;
pub mod fetch;
pub mod table;

use std::path::Path;

use anyhow::Context;
use courtmap_core::CourtRecord;
use courtmap_sync::SurveyClient;
use serde_json::Value;

use crate::config::Settings;

pub fn client(settings: &Settings) -> SurveyClient {
    SurveyClient::new(settings.base_url.clone()).with_rayon_path(settings.rayon_path.clone())
}

/// Raw rayon response, from a saved file or the server.
pub async fn load_response(settings: &Settings, input: Option<&Path>) -> anyhow::Result<Value> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => {
            let token = settings.require_token()?;
            client(settings)
                .fetch_rayon_assessment(token)
                .await
                .context("fetching rayon assessment data")
        }
    }
}

/// Canonical dataset. A malformed response yields an empty dataset, logged.
pub async fn load_dataset(
    settings: &Settings,
    input: Option<&Path>,
) -> anyhow::Result<Vec<CourtRecord>> {
    let response = load_response(settings, input).await?;
    Ok(courtmap_core::build(&response))
}
