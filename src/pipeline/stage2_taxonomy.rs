use std::collections::HashMap;

use tracing::debug;

use crate::input::ResultDocument;
use crate::model::score::Score;
use crate::model::summary::{ModelTaxonomy, ScenarioGroup};
use crate::pipeline::stage1_decode::KeyDecoder;

pub fn run_stage2(document: &ResultDocument, decoder: &KeyDecoder) -> Vec<ModelTaxonomy> {
    document
        .models
        .iter()
        .map(|m| ModelTaxonomy {
            model: m.model.clone(),
            groups: build_taxonomy(m.entries.iter().map(|(k, s)| (k.as_str(), *s)), decoder),
        })
        .collect()
}

/// Groups decoded scores by scenario in first-seen order. Constructs that no key supplies stay
/// at `Score::ZERO`; a repeated (scenario, construct) pair overwrites the earlier value.
pub fn build_taxonomy<'a, I>(entries: I, decoder: &KeyDecoder) -> Vec<ScenarioGroup>
where
    I: IntoIterator<Item = (&'a str, Score)>,
{
    let mut groups: Vec<ScenarioGroup> = Vec::new();
    let mut index_by_scenario: HashMap<String, usize> = HashMap::new();
    let mut filled: Vec<[bool; 3]> = Vec::new();

    for (key, score) in entries {
        let Some(decoded) = decoder.decode(key) else {
            continue;
        };
        let idx = match index_by_scenario.get(decoded.scenario.as_str()) {
            Some(&idx) => idx,
            None => {
                let idx = groups.len();
                groups.push(ScenarioGroup::empty(decoded.scenario.clone()));
                filled.push([false; 3]);
                index_by_scenario.insert(decoded.scenario.clone(), idx);
                idx
            }
        };
        let slot = decoded.construct as usize;
        if filled[idx][slot] {
            debug!(
                key,
                scenario = %decoded.scenario,
                construct = %decoded.construct,
                "duplicate scenario/construct key; keeping the later value"
            );
        }
        filled[idx][slot] = true;
        groups[idx].set(decoded.construct, score);
    }

    groups
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_taxonomy.rs"]
mod tests;
