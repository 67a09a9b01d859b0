use serde::Serialize;

use crate::model::construct::Construct;
use crate::model::summary::ModelTaxonomy;
use crate::scenarios::ScenarioDef;

pub const PERCENT_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub scenario: String,
    pub label: String,
    pub model: String,
    pub score: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub model: String,
    pub points: Vec<RadarPoint>,
}

pub type RadarChartData = Vec<RadarSeries>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarCharts {
    #[serde(rename = "s")]
    pub sequencing: RadarChartData,
    #[serde(rename = "c")]
    pub cloze: RadarChartData,
    #[serde(rename = "p")]
    pub prediction: RadarChartData,
}

impl RadarCharts {
    pub fn get(&self, construct: Construct) -> &RadarChartData {
        match construct {
            Construct::Sequencing => &self.sequencing,
            Construct::Cloze => &self.cloze,
            Construct::Prediction => &self.prediction,
        }
    }
}

pub fn run_stage4(taxonomies: &[ModelTaxonomy], scenarios: &[ScenarioDef]) -> RadarCharts {
    RadarCharts {
        sequencing: project_radar(taxonomies, scenarios, Construct::Sequencing),
        cloze: project_radar(taxonomies, scenarios, Construct::Cloze),
        prediction: project_radar(taxonomies, scenarios, Construct::Prediction),
    }
}

/// Points follow the canonical scenario order. A scenario the model lacks is left out of its
/// series rather than zero-filled, and a model with no points gets no series.
pub fn project_radar(
    taxonomies: &[ModelTaxonomy],
    scenarios: &[ScenarioDef],
    construct: Construct,
) -> RadarChartData {
    let mut out = Vec::new();
    for taxonomy in taxonomies {
        let mut points = Vec::new();
        for def in scenarios {
            let Some(group) = taxonomy.group(&def.id) else {
                continue;
            };
            let scaled = group.get(construct).scaled(PERCENT_SCALE);
            points.push(RadarPoint {
                scenario: def.id.clone(),
                label: def.name.clone(),
                model: taxonomy.model.clone(),
                score: scaled.accuracy,
                std: scaled.dispersion,
                min: (scaled.accuracy - scaled.dispersion).max(0.0),
                max: (scaled.accuracy + scaled.dispersion).min(PERCENT_SCALE),
            });
        }
        if !points.is_empty() {
            out.push(RadarSeries {
                model: taxonomy.model.clone(),
                points,
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_radar.rs"]
mod tests;
