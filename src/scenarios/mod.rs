use serde::{Deserialize, Serialize};

pub mod defs;

pub use defs::arxiv_domains;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
}

impl ScenarioDef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub fn display_name<'a>(defs: &'a [ScenarioDef], id: &'a str) -> &'a str {
    defs.iter()
        .find(|d| d.id == id)
        .map(|d| d.name.as_str())
        .unwrap_or(id)
}

pub fn canonical_index(defs: &[ScenarioDef], id: &str) -> Option<usize> {
    defs.iter().position(|d| d.id == id)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scenarios/tests.rs"]
mod tests;
