pub mod json;
pub mod text;
pub mod view;

use crate::model::score::Score;
use crate::model::summary::{ModelSummary, VersionSummary};
use crate::scenarios::ScenarioDef;

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub version: &'a str,
    pub family_prefix: &'a str,
    pub scenario_filter: Option<&'a str>,
    pub sort_by: &'a str,
    pub search: &'a str,
    pub rows: &'a [&'a ModelSummary],
    pub version_summary: &'a VersionSummary,
    pub scenarios: &'a [ScenarioDef],
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_percent(v: f64) -> String {
    format!("{:.1}", v * 100.0)
}

pub fn format_score_percent(score: Score) -> String {
    format!(
        "{} ± {}",
        format_percent(score.accuracy),
        format_percent(score.dispersion)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
