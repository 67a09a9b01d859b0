use serde::{Deserialize, Serialize};

use crate::model::construct::Construct;
use crate::model::score::{Score, mean_score};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGroup {
    pub scenario: String,
    pub s: Score,
    pub c: Score,
    pub p: Score,
}

impl ScenarioGroup {
    pub fn empty(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            s: Score::ZERO,
            c: Score::ZERO,
            p: Score::ZERO,
        }
    }

    pub fn get(&self, construct: Construct) -> Score {
        match construct {
            Construct::Sequencing => self.s,
            Construct::Cloze => self.c,
            Construct::Prediction => self.p,
        }
    }

    pub fn set(&mut self, construct: Construct, score: Score) {
        match construct {
            Construct::Sequencing => self.s = score,
            Construct::Cloze => self.c = score,
            Construct::Prediction => self.p = score,
        }
    }

    pub fn composite(&self) -> Score {
        mean_score([self.s, self.c, self.p])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTaxonomy {
    pub model: String,
    pub groups: Vec<ScenarioGroup>,
}

impl ModelTaxonomy {
    pub fn group(&self, scenario: &str) -> Option<&ScenarioGroup> {
        self.groups.iter().find(|g| g.scenario == scenario)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model: String,
    pub avg_s: Score,
    pub avg_c: Score,
    pub avg_p: Score,
    pub avg_overall: Score,
    pub groups: Vec<ScenarioGroup>,
}

impl ModelSummary {
    pub fn average(&self, construct: Construct) -> Score {
        match construct {
            Construct::Sequencing => self.avg_s,
            Construct::Cloze => self.avg_c,
            Construct::Prediction => self.avg_p,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAverage {
    pub scenario: String,
    pub name: String,
    pub n_models: usize,
    pub s: Score,
    pub c: Score,
    pub p: Score,
    pub overall: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version: String,
    pub n_models: usize,
    pub avg_s: Score,
    pub avg_c: Score,
    pub avg_p: Score,
    pub avg_overall: Score,
    pub scenarios: Vec<ScenarioAverage>,
}

impl VersionSummary {
    pub fn average(&self, construct: Construct) -> Score {
        match construct {
            Construct::Sequencing => self.avg_s,
            Construct::Cloze => self.avg_c,
            Construct::Prediction => self.avg_p,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    pub model: String,
    pub avg: f64,
    pub scores: Vec<(String, f64)>,
}
