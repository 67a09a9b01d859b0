use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::construct::construct_order;
use crate::model::profile::BenchmarkProfile;
use crate::model::summary::{ModelSummary, VersionSummary};
use crate::pipeline::stage4_radar::RadarCharts;
use crate::report::json::{SummaryDocument, ToolMeta, render_radar_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::view::LeaderboardView;
use crate::report::{ReportContext, format_f64_6};
use crate::scenarios::display_name;

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub profile: &'a BenchmarkProfile,
    pub rows: Vec<&'a ModelSummary>,
    pub version_summary: &'a VersionSummary,
    pub radar: &'a RadarCharts,
    pub view: &'a LeaderboardView,
    pub scenario_filter: Option<&'a str>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_leaderboard_tsv(input, &out_dir.join("leaderboard.tsv"))?;
    write_scenarios_tsv(input, &out_dir.join("scenarios.tsv"))?;

    let radar = render_radar_json(input.radar)?;
    write_text(&out_dir.join("radar.json"), &radar)?;

    let summary = SummaryDocument {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        version: &input.profile.version,
        family_prefix: &input.profile.family_prefix,
        scenario_filter: input.scenario_filter,
        sort_by: input.view.sort_by().name(),
        search: input.view.search(),
        n_models: input.rows.len(),
        version_summary: input.version_summary,
        models: &input.rows,
    };
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;

    let ctx = ReportContext {
        version: &input.profile.version,
        family_prefix: &input.profile.family_prefix,
        scenario_filter: input.scenario_filter,
        sort_by: input.view.sort_by().name(),
        search: input.view.search(),
        rows: &input.rows,
        version_summary: input.version_summary,
        scenarios: &input.profile.scenarios,
    };
    write_text(&out_dir.join("report.txt"), &render_report_text(&ctx))?;

    info!(
        out_dir = %out_dir.display(),
        n_rows = input.rows.len(),
        "wrote leaderboard reports"
    );
    Ok(())
}

fn write_leaderboard_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "rank",
        "model",
        "avg_s_acc",
        "avg_s_std",
        "avg_c_acc",
        "avg_c_std",
        "avg_p_acc",
        "avg_p_std",
        "avg_overall_acc",
        "avg_overall_std",
        "n_scenarios",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (idx, row) in input.rows.iter().enumerate() {
        let line = [
            (idx + 1).to_string(),
            row.model.clone(),
            format_f64_6(row.avg_s.accuracy),
            format_f64_6(row.avg_s.dispersion),
            format_f64_6(row.avg_c.accuracy),
            format_f64_6(row.avg_c.dispersion),
            format_f64_6(row.avg_p.accuracy),
            format_f64_6(row.avg_p.dispersion),
            format_f64_6(row.avg_overall.accuracy),
            format_f64_6(row.avg_overall.dispersion),
            row.groups.len().to_string(),
        ]
        .join("\t");
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

fn write_scenarios_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = String::from("model\tscenario\tscenario_name");
    for construct in construct_order() {
        header.push_str(&format!("\t{0}_acc\t{0}_std", construct.code()));
    }
    header.push_str("\tcomposite_acc\tcomposite_std");
    writeln!(w, "{}", header)?;

    for row in &input.rows {
        for group in &row.groups {
            let mut line = format!(
                "{}\t{}\t{}",
                row.model,
                group.scenario,
                display_name(&input.profile.scenarios, &group.scenario)
            );
            for &construct in construct_order() {
                let score = group.get(construct);
                line.push('\t');
                line.push_str(&format_f64_6(score.accuracy));
                line.push('\t');
                line.push_str(&format_f64_6(score.dispersion));
            }
            let composite = group.composite();
            line.push('\t');
            line.push_str(&format_f64_6(composite.accuracy));
            line.push('\t');
            line.push_str(&format_f64_6(composite.dispersion));
            writeln!(w, "{}", line)?;
        }
    }
    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
