use super::*;
use crate::model::score::Score;
use crate::model::summary::ScenarioGroup;
use crate::pipeline::stage3_aggregate::{summarize_model, summarize_version};
use crate::pipeline::stage4_radar::run_stage4;
use crate::model::summary::ModelTaxonomy;
use crate::report::view::SortKey;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("robench_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn groups(acc: f64) -> Vec<ScenarioGroup> {
    let mut g = ScenarioGroup::empty("math");
    g.s = Score::new(acc, 0.1);
    g.c = Score::new(acc, 0.1);
    g.p = Score::new(acc, 0.1);
    vec![g]
}

#[test]
fn test_write_reports_creates_files() {
    let profile = BenchmarkProfile::robench_2024b();
    let summaries = vec![
        summarize_model("low", &groups(0.2)),
        summarize_model("high", &groups(0.9)),
        summarize_model("empty", &[]),
    ];
    let taxonomies: Vec<ModelTaxonomy> = summaries
        .iter()
        .map(|s| ModelTaxonomy {
            model: s.model.clone(),
            groups: s.groups.clone(),
        })
        .collect();
    let version_summary = summarize_version(&profile.version, &summaries, &profile.scenarios);
    let radar = run_stage4(&taxonomies, &profile.scenarios);
    let view = LeaderboardView::new(SortKey::AvgOverall, "");

    let input = Stage5Input {
        profile: &profile,
        rows: view.apply(&summaries),
        version_summary: &version_summary,
        radar: &radar,
        view: &view,
        scenario_filter: None,
        tool_name: "robench-leaderboard".to_string(),
        tool_version: "0.0.0".to_string(),
    };

    let out = make_temp_dir().join("out");
    write_reports(&input, &out).unwrap();

    for name in [
        "leaderboard.tsv",
        "scenarios.tsv",
        "radar.json",
        "summary.json",
        "report.txt",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }

    let tsv = std::fs::read_to_string(out.join("leaderboard.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("rank\tmodel\tavg_s_acc"));
    assert!(lines[1].starts_with("1\thigh\t0.900000\t0.100000"));
    assert!(lines[2].starts_with("2\tlow\t"));
    assert!(lines[3].starts_with("3\tempty\t0.000000"));

    let scenarios = std::fs::read_to_string(out.join("scenarios.tsv")).unwrap();
    assert!(scenarios.lines().next().unwrap().contains("s_acc\ts_std\tc_acc"));
    assert_eq!(scenarios.lines().count(), 3);
    assert!(scenarios.contains("high\tmath\tMathematics\t0.900000"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["version"], "2024b");
    assert_eq!(summary["family_prefix"], "robench2024b");
    assert_eq!(summary["n_models"], 3);
    assert_eq!(summary["models"][0]["model"], "high");
    assert_eq!(summary["sort_by"], "avg_overall");

    let report = std::fs::read_to_string(out.join("report.txt")).unwrap();
    assert!(report.contains("Version: 2024b"));
    assert!(report.contains("no decoded scenarios"));
}
