use std::cmp::Ordering;

use crate::model::summary::ModelSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    AvgS,
    AvgC,
    AvgP,
    #[default]
    AvgOverall,
}

impl SortKey {
    pub fn name(self) -> &'static str {
        match self {
            SortKey::AvgS => "avg_s",
            SortKey::AvgC => "avg_c",
            SortKey::AvgP => "avg_p",
            SortKey::AvgOverall => "avg_overall",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "avg_s" | "s" => Some(SortKey::AvgS),
            "avg_c" | "c" => Some(SortKey::AvgC),
            "avg_p" | "p" => Some(SortKey::AvgP),
            "avg_overall" | "overall" | "avg" => Some(SortKey::AvgOverall),
            _ => None,
        }
    }

    pub fn value(self, row: &ModelSummary) -> f64 {
        match self {
            SortKey::AvgS => row.avg_s.accuracy,
            SortKey::AvgC => row.avg_c.accuracy,
            SortKey::AvgP => row.avg_p.accuracy,
            SortKey::AvgOverall => row.avg_overall.accuracy,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardView {
    sort_by: SortKey,
    search: String,
}

impl LeaderboardView {
    pub fn new(sort_by: SortKey, search: &str) -> Self {
        let mut view = Self::default();
        view.set_sort_by(sort_by);
        view.set_search(search);
        view
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_sort_by(&mut self, key: SortKey) {
        self.sort_by = key;
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_lowercase();
    }

    pub fn matches(&self, model: &str) -> bool {
        self.search.is_empty() || model.to_lowercase().contains(&self.search)
    }

    pub fn apply<'a>(&self, rows: &'a [ModelSummary]) -> Vec<&'a ModelSummary> {
        let mut out: Vec<&ModelSummary> = rows.iter().filter(|r| self.matches(&r.model)).collect();
        let key = self.sort_by;
        out.sort_by(|a, b| {
            key.value(b)
                .partial_cmp(&key.value(a))
                .unwrap_or(Ordering::Equal)
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/view.rs"]
mod tests;
