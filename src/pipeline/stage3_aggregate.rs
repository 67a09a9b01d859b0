use crate::input::ResultDocument;
use crate::model::construct::Construct;
use crate::model::score::{Score, mean_score};
use crate::model::summary::{
    FlatRow, ModelSummary, ModelTaxonomy, ScenarioAverage, ScenarioGroup, VersionSummary,
};
use crate::scenarios::{ScenarioDef, display_name};

pub fn run_stage3(taxonomies: &[ModelTaxonomy]) -> Vec<ModelSummary> {
    taxonomies
        .iter()
        .map(|t| summarize_model(&t.model, &t.groups))
        .collect()
}

pub fn construct_average(groups: &[ScenarioGroup], construct: Construct) -> Score {
    mean_score(groups.iter().map(|g| g.get(construct)))
}

/// Construct-first averaging: each construct is averaged across scenarios, then the overall
/// score is the plain mean of the three construct averages. Empty input stays at zero.
pub fn summarize_model(model: &str, groups: &[ScenarioGroup]) -> ModelSummary {
    let avg_s = construct_average(groups, Construct::Sequencing);
    let avg_c = construct_average(groups, Construct::Cloze);
    let avg_p = construct_average(groups, Construct::Prediction);
    ModelSummary {
        model: model.to_string(),
        avg_s,
        avg_c,
        avg_p,
        avg_overall: mean_score([avg_s, avg_c, avg_p]),
        groups: groups.to_vec(),
    }
}

pub fn filter_scenario(summary: &ModelSummary, scenario: &str) -> ModelSummary {
    match summary.groups.iter().find(|g| g.scenario == scenario) {
        Some(group) => ModelSummary {
            model: summary.model.clone(),
            avg_s: group.s,
            avg_c: group.c,
            avg_p: group.p,
            avg_overall: group.composite(),
            groups: vec![group.clone()],
        },
        None => ModelSummary {
            model: summary.model.clone(),
            avg_s: Score::ZERO,
            avg_c: Score::ZERO,
            avg_p: Score::ZERO,
            avg_overall: Score::ZERO,
            groups: Vec::new(),
        },
    }
}

pub fn filter_summaries(summaries: &[ModelSummary], scenario: &str) -> Vec<ModelSummary> {
    summaries
        .iter()
        .map(|s| filter_scenario(s, scenario))
        .collect()
}

/// Averages across models. Scenarios are listed canonical-first, then any extra scenario ids in
/// first-seen order; each scenario averages only over the models that report it.
pub fn summarize_version(
    version: &str,
    summaries: &[ModelSummary],
    scenarios: &[ScenarioDef],
) -> VersionSummary {
    let mut scenario_ids: Vec<&str> = scenarios.iter().map(|d| d.id.as_str()).collect();
    for summary in summaries {
        for group in &summary.groups {
            if !scenario_ids.contains(&group.scenario.as_str()) {
                scenario_ids.push(group.scenario.as_str());
            }
        }
    }

    let mut scenario_avgs = Vec::new();
    for id in scenario_ids {
        let present: Vec<&ScenarioGroup> = summaries
            .iter()
            .filter_map(|s| s.groups.iter().find(|g| g.scenario == id))
            .collect();
        if present.is_empty() {
            continue;
        }
        scenario_avgs.push(ScenarioAverage {
            scenario: id.to_string(),
            name: display_name(scenarios, id).to_string(),
            n_models: present.len(),
            s: mean_score(present.iter().map(|g| g.s)),
            c: mean_score(present.iter().map(|g| g.c)),
            p: mean_score(present.iter().map(|g| g.p)),
            overall: mean_score(present.iter().map(|g| g.composite())),
        });
    }

    VersionSummary {
        version: version.to_string(),
        n_models: summaries.len(),
        avg_s: mean_score(summaries.iter().map(|s| s.avg_s)),
        avg_c: mean_score(summaries.iter().map(|s| s.avg_c)),
        avg_p: mean_score(summaries.iter().map(|s| s.avg_p)),
        avg_overall: mean_score(summaries.iter().map(|s| s.avg_overall)),
        scenarios: scenario_avgs,
    }
}

pub fn flatten_results(document: &ResultDocument) -> Vec<FlatRow> {
    document
        .models
        .iter()
        .map(|m| {
            let scores: Vec<(String, f64)> = m
                .entries
                .iter()
                .map(|(k, s)| (k.clone(), s.accuracy))
                .collect();
            let avg = if scores.is_empty() {
                0.0
            } else {
                scores.iter().map(|(_, v)| v).sum::<f64>() / scores.len() as f64
            };
            FlatRow {
                model: m.model.clone(),
                avg,
                scores,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
