use serde::Serialize;

use crate::model::summary::{FlatRow, ModelSummary, VersionSummary};
use crate::pipeline::stage4_radar::{RadarChartData, RadarCharts};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument<'a> {
    pub tool: ToolMeta,
    pub version: &'a str,
    pub family_prefix: &'a str,
    pub scenario_filter: Option<&'a str>,
    pub sort_by: &'a str,
    pub search: &'a str,
    pub n_models: usize,
    pub version_summary: &'a VersionSummary,
    pub models: &'a [&'a ModelSummary],
}

pub fn render_summary_json(doc: &SummaryDocument<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

pub fn render_rows_json(rows: &[&ModelSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

pub fn render_radar_json(charts: &RadarCharts) -> serde_json::Result<String> {
    serde_json::to_string_pretty(charts)
}

pub fn render_series_json(series: &RadarChartData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(series)
}

pub fn render_flat_json(rows: &[&FlatRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
