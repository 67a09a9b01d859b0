pub mod stage1_decode;
pub mod stage2_taxonomy;
pub mod stage3_aggregate;
pub mod stage4_radar;
pub mod stage5_report;

use tracing::info;

use crate::input::ResultDocument;
use crate::model::profile::{BenchmarkProfile, ProfileError};
use crate::model::summary::{ModelSummary, ModelTaxonomy, VersionSummary};
use stage1_decode::KeyDecoder;
use stage2_taxonomy::run_stage2;
use stage3_aggregate::{run_stage3, summarize_version};
use stage4_radar::{RadarCharts, run_stage4};

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub taxonomies: Vec<ModelTaxonomy>,
    pub summaries: Vec<ModelSummary>,
    pub version_summary: VersionSummary,
    pub radar: RadarCharts,
}

pub fn run_engine(
    document: &ResultDocument,
    profile: &BenchmarkProfile,
) -> Result<EngineOutput, ProfileError> {
    let decoder = KeyDecoder::new(profile)?;
    let taxonomies = run_stage2(document, &decoder);
    let summaries = run_stage3(&taxonomies);
    let version_summary = summarize_version(&profile.version, &summaries, &profile.scenarios);
    let radar = run_stage4(&taxonomies, &profile.scenarios);

    info!(
        version = %profile.version,
        n_models = summaries.len(),
        n_scenarios = version_summary.scenarios.len(),
        "aggregated benchmark results"
    );

    Ok(EngineOutput {
        taxonomies,
        summaries,
        version_summary,
        radar,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
