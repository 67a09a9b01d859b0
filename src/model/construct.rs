use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Construct {
    #[serde(rename = "s")]
    Sequencing,
    #[serde(rename = "c")]
    Cloze,
    #[serde(rename = "p")]
    Prediction,
}

impl Construct {
    pub fn code(self) -> char {
        match self {
            Construct::Sequencing => 's',
            Construct::Cloze => 'c',
            Construct::Prediction => 'p',
        }
    }

    /// Only the exact single-letter codes are accepted; `"sx"` or `"S"` are not constructs.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Construct::Sequencing),
            "c" => Some(Construct::Cloze),
            "p" => Some(Construct::Prediction),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Construct::Sequencing => "Sequencing",
            Construct::Cloze => "Cloze",
            Construct::Prediction => "Prediction",
        }
    }
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

pub fn construct_order() -> &'static [Construct] {
    &[
        Construct::Sequencing,
        Construct::Cloze,
        Construct::Prediction,
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/construct.rs"]
mod tests;
