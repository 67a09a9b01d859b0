//! Decoding and aggregation of RoBench SCP evaluation results.
//!
//! Raw benchmark output maps opaque keys such as `robench2024b_all_setcsSCP-s` to
//! `{acc, std}` pairs. The pipeline decodes each key into a (scenario, construct) pair,
//! groups scores per model, averages them per construct, per scenario and overall, and
//! projects radar series for chart consumers.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scenarios;

pub use input::{InputError, ResultDocument, load_document, load_version, parse_document};
pub use model::{
    BenchmarkProfile, BenchmarkVersion, Construct, ModelSummary, ModelTaxonomy, ProfileError,
    ScenarioGroup, Score,
};
pub use pipeline::{EngineOutput, run_engine};
