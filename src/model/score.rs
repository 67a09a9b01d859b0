use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "acc")]
    pub accuracy: f64,
    #[serde(rename = "std", default, deserialize_with = "lenient_dispersion")]
    pub dispersion: f64,
}

impl Score {
    pub const ZERO: Score = Score {
        accuracy: 0.0,
        dispersion: 0.0,
    };

    pub fn new(accuracy: f64, dispersion: f64) -> Self {
        Self {
            accuracy,
            dispersion,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            accuracy: self.accuracy * factor,
            dispersion: self.dispersion * factor,
        }
    }
}

// Harnesses emit `null` or "N/A" when no spread was measured.
fn lenient_dispersion<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_f64).unwrap_or(0.0))
}

pub fn mean_score<I>(scores: I) -> Score
where
    I: IntoIterator<Item = Score>,
{
    let mut acc_sum = 0.0f64;
    let mut std_sum = 0.0f64;
    let mut n = 0usize;
    for s in scores {
        acc_sum += s.accuracy;
        std_sum += s.dispersion;
        n += 1;
    }
    if n == 0 {
        return Score::ZERO;
    }
    Score {
        accuracy: acc_sum / n as f64,
        dispersion: std_sum / n as f64,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/score.rs"]
mod tests;
