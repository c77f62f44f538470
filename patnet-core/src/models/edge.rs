use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order a pair so the lexicographically smaller id comes first.
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An unordered co-inventor pair aggregated over the whole corpus.
///
/// `inventor_a < inventor_b` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationEdge {
    pub inventor_a: String,
    pub inventor_b: String,
    /// Number of distinct shared patents.
    pub edge_weight: u32,
    pub shared_patents: Vec<String>,
    pub first_collaboration_date: NaiveDate,
    pub last_collaboration_date: NaiveDate,
    pub first_year: i32,
    pub last_year: i32,
    /// Shared-patent count per observation-window year, zeros included.
    pub yearly_counts: BTreeMap<i32, u32>,
}

impl CollaborationEdge {
    /// `a--b` label used in logs and error messages.
    pub fn label(&self) -> String {
        format!("{}--{}", self.inventor_a, self.inventor_b)
    }

    /// Whether the pair shared at least one patent filed in `year`.
    pub fn active_in(&self, year: i32) -> bool {
        self.yearly_counts.get(&year).is_some_and(|c| *c > 0)
    }

    /// Sum of the per-year counts; never exceeds `edge_weight`.
    pub fn windowed_weight(&self) -> u32 {
        self.yearly_counts.values().sum()
    }
}
