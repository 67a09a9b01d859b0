pub mod construct;
pub mod profile;
pub mod score;
pub mod summary;

pub use construct::Construct;
pub use profile::{BenchmarkProfile, BenchmarkVersion, ProfileError};
pub use score::Score;
pub use summary::{ModelSummary, ModelTaxonomy, ScenarioGroup};
