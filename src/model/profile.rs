use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scenarios::{ScenarioDef, arxiv_domains, display_name};

/// Leading decoration on the raw scenario token, e.g. `all_setcsSCP`.
pub const DEFAULT_SCENARIO_PREFIX: &str = "all_set";
pub const DEFAULT_TASK_SUFFIX: &str = "SCP";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
    #[error("invalid key pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkVersion {
    V2024b,
    V2025a,
}

impl BenchmarkVersion {
    pub fn tag(self) -> &'static str {
        match self {
            BenchmarkVersion::V2024b => "2024b",
            BenchmarkVersion::V2025a => "2025a",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "2024b" => Some(BenchmarkVersion::V2024b),
            "2025a" => Some(BenchmarkVersion::V2025a),
            _ => None,
        }
    }

    pub fn all() -> &'static [BenchmarkVersion] {
        &[BenchmarkVersion::V2024b, BenchmarkVersion::V2025a]
    }
}

impl std::fmt::Display for BenchmarkVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkProfile {
    pub version: String,
    pub family_prefix: String,
    #[serde(default = "default_scenario_prefix")]
    pub scenario_prefix: String,
    #[serde(default = "default_task_suffix")]
    pub task_suffix: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

fn default_scenario_prefix() -> String {
    DEFAULT_SCENARIO_PREFIX.to_string()
}

fn default_task_suffix() -> String {
    DEFAULT_TASK_SUFFIX.to_string()
}

impl BenchmarkProfile {
    pub fn robench_2024b() -> Self {
        Self {
            version: BenchmarkVersion::V2024b.tag().to_string(),
            family_prefix: "robench2024b".to_string(),
            scenario_prefix: default_scenario_prefix(),
            task_suffix: default_task_suffix(),
            scenarios: arxiv_domains(),
        }
    }

    pub fn robench_2025a() -> Self {
        let mut base = Self::robench_2024b();
        base.version = BenchmarkVersion::V2025a.tag().to_string();
        base.family_prefix = "robench2025a".to_string();
        base
    }

    pub fn builtin(version: BenchmarkVersion) -> Self {
        match version {
            BenchmarkVersion::V2024b => Self::robench_2024b(),
            BenchmarkVersion::V2025a => Self::robench_2025a(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ProfileError> {
        let profile: BenchmarkProfile = serde_json::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.version.trim().is_empty() {
            return Err(ProfileError::Invalid("version tag is empty".to_string()));
        }
        if self.family_prefix.is_empty() {
            return Err(ProfileError::Invalid("family_prefix is empty".to_string()));
        }
        let mut seen = BTreeSet::new();
        for def in &self.scenarios {
            if !seen.insert(def.id.as_str()) {
                return Err(ProfileError::Invalid(format!(
                    "duplicate scenario id: {}",
                    def.id
                )));
            }
        }
        Ok(())
    }

    pub fn scenario_name<'a>(&'a self, id: &'a str) -> &'a str {
        display_name(&self.scenarios, id)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
