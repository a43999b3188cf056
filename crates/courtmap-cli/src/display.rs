//! Terminal rendering for court datasets and detail payloads.
//!
//! The table mirrors the web view: row number, name, instance, overall
//! score, the five aspects and the response count. Each score cell carries
//! its severity tier as a one-character marker.

use std::fmt::Write as _;

use courtmap_core::{Aspect, CourtRecord, Rating, SortField, SortSpec, format_score};
use serde_json::Value;

const NAME_MAX: usize = 40;
const SCORE_WIDTH: usize = 6;

// ── Column layout ──

/// Row number and name columns. The instance column follows them and is
/// not sortable.
const LEADING: &[(SortField, &str)] = &[(SortField::Number, "№"), (SortField::Name, "Наименование суда")];

const INSTANCE_HEADING: &str = "Инстанция";
const OVERALL_HEADING: &str = "Общая";
const COUNT_HEADING: &str = "Кол-во оценок";

// ── Public API ──

/// Render the court table for `records`, already in display order.
pub fn render_table(records: &[&CourtRecord], spec: &SortSpec) -> String {
    let name_w = column_width(records.iter().map(|r| r.name.as_str()), LEADING[1].1, NAME_MAX);
    let inst_w = column_width(records.iter().map(|r| r.instance.as_str()), INSTANCE_HEADING, NAME_MAX);
    let num_w = records.len().to_string().len().max(LEADING[0].1.chars().count()) + 1;

    let mut out = String::new();

    // Header row.
    let _ = write!(
        out,
        "{:<num_w$} {:<name_w$} {:<inst_w$}",
        heading(spec, LEADING[0].0, LEADING[0].1),
        heading(spec, LEADING[1].0, LEADING[1].1),
        INSTANCE_HEADING,
    );
    let _ = write!(out, " {:>w$}", heading(spec, SortField::Overall, OVERALL_HEADING), w = SCORE_WIDTH + 1);
    for aspect in Aspect::ALL {
        let w = aspect.heading().chars().count().max(SCORE_WIDTH) + 1;
        let _ = write!(out, " {:>w$}", heading(spec, aspect_field(aspect), aspect.heading()));
    }
    let _ = writeln!(out, " {:>w$}", heading(spec, SortField::Count, COUNT_HEADING), w = COUNT_HEADING.chars().count() + 1);

    // Body.
    for (i, r) in records.iter().enumerate() {
        let _ = write!(
            out,
            "{:<num_w$} {:<name_w$} {:<inst_w$}",
            i + 1,
            truncate(&r.name, name_w),
            truncate(&r.instance, inst_w),
        );
        let _ = write!(out, " {:>w$}", score_cell(r.overall_assessment), w = SCORE_WIDTH + 1);
        for (aspect, value) in r.assessment.iter() {
            let w = aspect.heading().chars().count().max(SCORE_WIDTH) + 1;
            let _ = write!(out, " {:>w$}", score_cell(value));
        }
        let _ = writeln!(out, " {:>w$}", r.total_survey_responses, w = COUNT_HEADING.chars().count() + 1);
    }

    out
}

/// One-line key for the tier markers.
pub fn legend() -> String {
    [Rating::Good, Rating::Fair, Rating::Poor]
        .iter()
        .map(|r| format!("{} {}", r.marker(), r))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Render a detail payload under its court's name.
pub fn render_detail(court_name: &str, detail: &Value) -> String {
    let body = serde_json::to_string_pretty(detail).unwrap_or_else(|_| detail.to_string());
    format!("=== {court_name} ===\n{body}\n")
}

// ── Helpers ──

fn score_cell(value: f64) -> String {
    format!("{}{}", format_score(value), Rating::classify(value).marker())
}

fn heading(spec: &SortSpec, field: SortField, title: &str) -> String {
    match spec.indicator(field) {
        Some(arrow) => format!("{title}{arrow}"),
        None => title.to_string(),
    }
}

fn aspect_field(aspect: Aspect) -> SortField {
    match aspect {
        Aspect::Judge => SortField::Judge,
        Aspect::Process => SortField::Process,
        Aspect::Staff => SortField::Staff,
        Aspect::Office => SortField::Office,
        Aspect::Building => SortField::Building,
    }
}

/// Width of a text column: widest value or heading (plus arrow), capped.
fn column_width<'a>(values: impl Iterator<Item = &'a str>, title: &str, cap: usize) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(title.chars().count() + 1))
        .max()
        .unwrap_or(0)
        .min(cap)
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtmap_core::{Assessment, SortDirection};
    use serde_json::json;

    fn court(id: i64, name: &str, overall: f64) -> CourtRecord {
        CourtRecord {
            id,
            name: name.into(),
            instance: "Первая инстанция".into(),
            overall_assessment: overall,
            assessment: Assessment {
                judge: 4.2,
                process: 0.0,
                staff: 1.5,
                office: 3.0,
                building: 3.6,
            },
            total_survey_responses: 31,
        }
    }

    #[test]
    fn table_has_header_and_one_line_per_court() {
        let a = court(1, "Ленинский районный суд", 3.9);
        let b = court(2, "Аламудунский районный суд", 0.0);
        let out = render_table(&[&a, &b], &SortSpec::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("№"));
        assert!(lines[0].contains("Судья"));
        assert!(lines[1].starts_with("1 "));
        assert!(lines[1].contains("Ленинский районный суд"));
        assert!(lines[2].starts_with("2 "));
    }

    #[test]
    fn score_cells_carry_tier_markers() {
        let a = court(1, "Суд", 3.9);
        let out = render_table(&[&a], &SortSpec::default());
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("3.9+"));
        assert!(row.contains("4.2+"));
        assert!(row.contains("0 "));
        assert!(row.contains("1.5!"));
        assert!(row.contains("3.0~"));
        assert!(row.trim_end().ends_with("31"));
    }

    #[test]
    fn active_column_shows_arrow() {
        let a = court(1, "Суд", 3.9);
        let spec = SortSpec::new(SortField::Staff, SortDirection::Descending);
        let header = render_table(&[&a], &spec).lines().next().unwrap().to_string();
        assert!(header.contains("Сотрудники↓"));
        assert!(!header.contains("Судья↓"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("короткое", 10), "короткое");
        assert_eq!(truncate("очень длинное название", 10), "очень д...");
    }

    #[test]
    fn empty_table_is_header_only() {
        let out = render_table(&[], &SortSpec::default());
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn legend_lists_tiers() {
        assert_eq!(legend(), "+ good   ~ fair   ! poor");
    }

    #[test]
    fn detail_is_pretty_printed() {
        let out = render_detail("Ошский городской суд", &json!({ "total": 5 }));
        assert_eq!(out, "=== Ошский городской суд ===\n{\n  \"total\": 5\n}\n");
    }
}
