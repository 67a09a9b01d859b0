use crate::model::construct::construct_order;
use crate::model::summary::{FlatRow, ModelSummary, ScenarioGroup};
use crate::report::{ReportContext, format_percent, format_score_percent};
use crate::scenarios::display_name;

pub fn render_table_text(rows: &[&ModelSummary]) -> String {
    let width = model_column_width(rows.iter().map(|r| r.model.as_str()));
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<width$}  {:>6}  {:>6}  {:>6}  {:>7}\n",
        "#", "Model", "Avg S", "Avg C", "Avg P", "Overall"
    ));
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>6}  {:>6}  {:>6}  {:>7}\n",
            idx + 1,
            row.model,
            format_percent(row.avg_s.accuracy),
            format_percent(row.avg_c.accuracy),
            format_percent(row.avg_p.accuracy),
            format_percent(row.avg_overall.accuracy),
        ));
    }
    out
}

pub fn render_detail_text(groups: &[ScenarioGroup], name_of: impl Fn(&str) -> String) -> String {
    let names: Vec<String> = groups.iter().map(|g| name_of(&g.scenario)).collect();
    let width = model_column_width(names.iter().map(String::as_str)).max("Scenario".len());
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<width$}  {:>6}  {:>6}  {:>6}  {:>9}\n",
        "Scenario", "S", "C", "P", "Composite"
    ));
    for (group, name) in groups.iter().zip(names.iter()) {
        out.push_str(&format!(
            "  {:<width$}  {:>6}  {:>6}  {:>6}  {:>9}\n",
            name,
            format_percent(group.s.accuracy),
            format_percent(group.c.accuracy),
            format_percent(group.p.accuracy),
            format_percent(group.composite().accuracy),
        ));
    }
    out
}

pub fn render_flat_text(rows: &[&FlatRow]) -> String {
    let width = model_column_width(rows.iter().map(|r| r.model.as_str()));
    let mut out = String::new();
    out.push_str(&format!("{:>3}  {:<width$}  {:>6}  {:>6}\n", "#", "Model", "Keys", "Avg"));
    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>6}  {:>6}\n",
            idx + 1,
            row.model,
            row.scores.len(),
            format_percent(row.avg),
        ));
    }
    out
}

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("RoBench SCP Leaderboard Report\n");
    out.push_str("==============================\n\n");

    out.push_str("1. Benchmark\n");
    out.push_str(&format!("Version: {}\n", ctx.version));
    out.push_str(&format!("Family prefix: {}\n", ctx.family_prefix));
    out.push_str(&format!("Models: {}\n", ctx.version_summary.n_models));
    match ctx.scenario_filter {
        Some(id) => out.push_str(&format!(
            "Scenario filter: {} ({})\n",
            id,
            display_name(ctx.scenarios, id)
        )),
        None => out.push_str("Scenario filter: all scenarios\n"),
    }
    out.push_str(&format!("Sorted by: {}\n", ctx.sort_by));
    if !ctx.search.is_empty() {
        out.push_str(&format!("Search: {}\n", ctx.search));
    }
    out.push('\n');

    out.push_str("2. Leaderboard\n");
    if ctx.rows.is_empty() {
        out.push_str("No rows.\n\n");
    } else {
        out.push_str(&render_table_text(ctx.rows));
        out.push('\n');
    }

    out.push_str("3. Construct averages across models\n");
    for &construct in construct_order() {
        out.push_str(&format!(
            "{}: {}\n",
            construct.display_name(),
            format_score_percent(ctx.version_summary.average(construct))
        ));
    }
    out.push_str(&format!(
        "Overall: {}\n\n",
        format_score_percent(ctx.version_summary.avg_overall)
    ));

    out.push_str("4. Scenario averages across models\n");
    if ctx.version_summary.scenarios.is_empty() {
        out.push_str("No scenarios decoded.\n");
    }
    for s in &ctx.version_summary.scenarios {
        out.push_str(&format!(
            "{} [{} models]: S={} C={} P={} composite={}\n",
            s.name,
            s.n_models,
            format_percent(s.s.accuracy),
            format_percent(s.c.accuracy),
            format_percent(s.p.accuracy),
            format_percent(s.overall.accuracy),
        ));
    }
    out.push('\n');

    out.push_str("5. Per-model detail\n");
    for row in ctx.rows {
        out.push_str(&format!("{}\n", row.model));
        if row.groups.is_empty() {
            out.push_str("  no decoded scenarios\n");
            continue;
        }
        out.push_str(&render_detail_text(&row.groups, |id| {
            display_name(ctx.scenarios, id).to_string()
        }));
    }

    out
}

fn model_column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(5)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
