use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::config::Settings;

pub async fn run(settings: &Settings, out: Option<PathBuf>) -> anyhow::Result<()> {
    let response = super::load_response(settings, None).await?;
    let json = serde_json::to_string_pretty(&response)?;

    match out {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "saved rayon response");
        }
        None => println!("{json}"),
    }
    Ok(())
}
