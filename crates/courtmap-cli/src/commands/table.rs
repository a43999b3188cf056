use std::path::PathBuf;

use anyhow::bail;
use courtmap_core::{CourtRecord, SortField, SortSpec, sort_with, sorted};

use crate::config::Settings;
use crate::display;

pub async fn run(
    settings: &Settings,
    input: Option<PathBuf>,
    sort: Option<SortField>,
    desc: bool,
    output: &str,
) -> anyhow::Result<()> {
    if output != "table" && output != "json" {
        bail!("unknown output format '{output}': expected table or json");
    }

    let records = super::load_dataset(settings, input.as_deref()).await?;
    let spec = sort_spec(sort, desc);
    let ordered = order(&records, &spec);

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
    } else {
        print!("{}", display::render_table(&ordered, &spec));
        println!();
        println!("{}", display::legend());
    }
    Ok(())
}

/// Replay header clicks: one click for ascending, a second for descending.
fn sort_spec(sort: Option<SortField>, desc: bool) -> SortSpec {
    let mut spec = SortSpec::default();
    if let Some(field) = sort {
        spec.toggle(field);
        if desc {
            spec.toggle(field);
        }
    }
    spec
}

/// Apply `spec`. Names get a case-insensitive comparator; row numbers are
/// assigned after ordering, so `number` keeps dataset order.
fn order<'a>(records: &'a [CourtRecord], spec: &SortSpec) -> Vec<&'a CourtRecord> {
    match (spec.field, spec.direction) {
        (Some(SortField::Name), Some(direction)) => sort_with(records, direction, |a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        }),
        _ => sorted(records, spec),
    }
}
