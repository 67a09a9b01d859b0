use regex::Regex;

use crate::model::construct::Construct;
use crate::model::profile::{BenchmarkProfile, ProfileError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    pub scenario: String,
    pub construct: Construct,
}

/// The construct is whatever follows the last `-` and must be exactly `s`, `c` or `p`.
#[derive(Debug, Clone)]
pub struct KeyDecoder {
    family_prefix: String,
    scenario_prefix: String,
    task_suffix: String,
    pattern: Regex,
}

impl KeyDecoder {
    pub fn new(profile: &BenchmarkProfile) -> Result<Self, ProfileError> {
        Self::with_decoration(
            &profile.family_prefix,
            &profile.scenario_prefix,
            &profile.task_suffix,
        )
    }

    pub fn with_decoration(
        family_prefix: &str,
        scenario_prefix: &str,
        task_suffix: &str,
    ) -> Result<Self, ProfileError> {
        if family_prefix.is_empty() {
            return Err(ProfileError::Invalid("family_prefix is empty".to_string()));
        }
        let pattern = Regex::new(&format!(
            r"(?s)^(?P<family>{})_(?P<scenario>.*)-(?P<construct>[^-]*)$",
            regex::escape(family_prefix)
        ))?;
        Ok(Self {
            family_prefix: family_prefix.to_string(),
            scenario_prefix: scenario_prefix.to_string(),
            task_suffix: task_suffix.to_string(),
            pattern,
        })
    }

    pub fn family_prefix(&self) -> &str {
        &self.family_prefix
    }

    pub fn decode(&self, key: &str) -> Option<DecodedKey> {
        let caps = self.pattern.captures(key)?;
        let construct = Construct::from_code(caps.name("construct")?.as_str())?;
        let raw = caps.name("scenario")?.as_str();
        Some(DecodedKey {
            scenario: self.strip_decoration(raw).to_string(),
            construct,
        })
    }

    fn strip_decoration<'k>(&self, raw: &'k str) -> &'k str {
        let token = raw
            .strip_prefix(self.scenario_prefix.as_str())
            .unwrap_or(raw);
        token
            .strip_suffix(self.task_suffix.as_str())
            .unwrap_or(token)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_decode.rs"]
mod tests;
