use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::profile::BenchmarkProfile;
use crate::model::score::Score;

pub mod source;

use source::{read_to_string_maybe_gz, resolve_version_source};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelResults {
    pub model: String,
    pub entries: Vec<(String, Score)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultDocument {
    pub models: Vec<ModelResults>,
}

impl ResultDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn model(&self, name: &str) -> Option<&ModelResults> {
        self.models.iter().find(|m| m.model == name)
    }
}

pub fn parse_document(text: &str) -> Result<ResultDocument, InputError> {
    let value: Value = serde_json::from_str(text)?;
    document_from_value(value)
}

pub fn document_from_value(value: Value) -> Result<ResultDocument, InputError> {
    let Value::Object(models) = value else {
        return Err(InputError::InvalidInput(
            "top-level value must be an object keyed by model".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(models.len());
    for (model, results) in models {
        let Value::Object(entries) = results else {
            warn!(model = %model, "model results are not an object; treating as empty");
            out.push(ModelResults {
                model,
                entries: Vec::new(),
            });
            continue;
        };

        let mut parsed = Vec::with_capacity(entries.len());
        for (key, raw) in entries {
            match serde_json::from_value::<Score>(raw) {
                Ok(score) => parsed.push((key, score)),
                Err(err) => {
                    debug!(model = %model, key = %key, error = %err, "skipping entry that is not a score");
                }
            }
        }
        out.push(ModelResults {
            model,
            entries: parsed,
        });
    }

    Ok(ResultDocument { models: out })
}

pub fn load_document(path: &Path) -> Result<ResultDocument, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "result document not found: {}",
            path.display()
        )));
    }
    let text = read_to_string_maybe_gz(path)?;
    let doc = parse_document(&text)?;
    info!(path = %path.display(), n_models = doc.models.len(), "loaded result document");
    Ok(doc)
}

pub fn load_version(data_dir: &Path, profile: &BenchmarkProfile) -> ResultDocument {
    let resolution = resolve_version_source(data_dir, &profile.version);
    if !resolution.exists {
        warn!(
            version = %profile.version,
            path = %resolution.path.display(),
            "no result document for benchmark version; showing no rows"
        );
        return ResultDocument::empty();
    }
    match load_document(&resolution.path) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(
                version = %profile.version,
                source = %resolution.name,
                error = %err,
                "failed to load result document; showing no rows"
            );
            ResultDocument::empty()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
