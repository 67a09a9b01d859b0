use super::*;
use crate::model::score::Score;
use crate::model::summary::ScenarioGroup;
use crate::scenarios::arxiv_domains;

fn taxonomy(model: &str, groups: Vec<ScenarioGroup>) -> ModelTaxonomy {
    ModelTaxonomy {
        model: model.to_string(),
        groups,
    }
}

fn group(scenario: &str, s: Score) -> ScenarioGroup {
    let mut g = ScenarioGroup::empty(scenario);
    g.s = s;
    g
}

#[test]
fn test_absent_scenario_is_omitted() {
    let taxonomies = vec![
        taxonomy("no-physics", vec![group("cs", Score::new(0.5, 0.1))]),
        taxonomy(
            "with-physics",
            vec![
                group("physics", Score::new(0.62, 0.07)),
                group("cs", Score::new(0.4, 0.0)),
            ],
        ),
    ];
    let data = project_radar(&taxonomies, &arxiv_domains(), Construct::Sequencing);
    assert_eq!(data.len(), 2);

    let first = &data[0];
    assert_eq!(first.model, "no-physics");
    assert!(first.points.iter().all(|p| p.scenario != "physics"));

    let second = &data[1];
    let ids: Vec<&str> = second.points.iter().map(|p| p.scenario.as_str()).collect();
    assert_eq!(ids, vec!["cs", "physics"]);
    let physics = &second.points[1];
    assert_eq!(physics.label, "Physics");
    assert_eq!(physics.model, "with-physics");
    let acc = 0.62 * 100.0;
    let std = 0.07 * 100.0;
    assert_eq!(physics.score, acc);
    assert_eq!(physics.std, std);
    assert_eq!(physics.min, (acc - std).max(0.0));
    assert_eq!(physics.max, (acc + std).min(100.0));
}

#[test]
fn test_envelope_is_clamped() {
    let taxonomies = vec![taxonomy(
        "m",
        vec![
            group("cs", Score::new(0.05, 0.2)),
            group("math", Score::new(0.95, 0.2)),
        ],
    )];
    let data = project_radar(&taxonomies, &arxiv_domains(), Construct::Sequencing);
    let cs = &data[0].points[0];
    let math = &data[0].points[1];
    assert_eq!(cs.min, 0.0);
    assert!((cs.max - 25.0).abs() < 1e-9);
    assert_eq!(math.max, 100.0);
    assert!((math.min - 75.0).abs() < 1e-9);
}

#[test]
fn test_zero_filled_construct_still_plotted() {
    let taxonomies = vec![taxonomy("m", vec![group("cs", Score::new(0.5, 0.1))])];
    let data = project_radar(&taxonomies, &arxiv_domains(), Construct::Cloze);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].points[0].score, 0.0);
    assert_eq!(data[0].points[0].min, 0.0);
}

#[test]
fn test_models_without_points_are_omitted() {
    let taxonomies = vec![
        taxonomy("empty", Vec::new()),
        taxonomy("unknown-only", vec![group("astro", Score::new(0.5, 0.1))]),
        taxonomy("ok", vec![group("stat", Score::new(0.5, 0.1))]),
    ];
    let data = project_radar(&taxonomies, &arxiv_domains(), Construct::Sequencing);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].model, "ok");
}

#[test]
fn test_run_stage4_all_constructs() {
    let mut g = ScenarioGroup::empty("eess");
    g.s = Score::new(0.1, 0.0);
    g.c = Score::new(0.2, 0.0);
    g.p = Score::new(0.3, 0.0);
    let charts = run_stage4(&[taxonomy("m", vec![g])], &arxiv_domains());
    for (construct, expected) in [
        (Construct::Sequencing, 10.0),
        (Construct::Cloze, 20.0),
        (Construct::Prediction, 30.0),
    ] {
        let series = charts.get(construct);
        assert!((series[0].points[0].score - expected).abs() < 1e-9);
    }
    let json = serde_json::to_value(&charts).unwrap();
    assert!(json.get("s").is_some());
    assert!(json.get("c").is_some());
    assert!(json.get("p").is_some());
}
