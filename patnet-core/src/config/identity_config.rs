use serde::{Deserialize, Serialize};

use super::defaults;

/// Inventor identity resolution configuration.
///
/// `score = name_weight * name + affiliation_weight * affiliation
///        + coinventor_weight * coinventor`, compared against `merge_threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Pairs scoring at or above this merge.
    pub merge_threshold: f64,
    /// Scores within this distance of the threshold are audited for review.
    pub ambiguity_margin: f64,
    /// Pairs with name similarity below this never merge.
    pub min_name_similarity: f64,
    pub name_weight: f64,
    pub affiliation_weight: f64,
    pub coinventor_weight: f64,
    /// Max application-date distance for affiliation and co-inventor evidence.
    pub affiliation_window_days: i64,
    /// Multiplier applied when a bare initial matches a full first name.
    pub initial_match_penalty: f64,
    /// Multiplier applied when both middle initials are present and differ.
    pub middle_conflict_penalty: f64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            merge_threshold: defaults::DEFAULT_MERGE_THRESHOLD,
            ambiguity_margin: defaults::DEFAULT_AMBIGUITY_MARGIN,
            min_name_similarity: defaults::DEFAULT_MIN_NAME_SIMILARITY,
            name_weight: defaults::DEFAULT_NAME_WEIGHT,
            affiliation_weight: defaults::DEFAULT_AFFILIATION_WEIGHT,
            coinventor_weight: defaults::DEFAULT_COINVENTOR_WEIGHT,
            affiliation_window_days: defaults::DEFAULT_AFFILIATION_WINDOW_DAYS,
            initial_match_penalty: defaults::DEFAULT_INITIAL_MATCH_PENALTY,
            middle_conflict_penalty: defaults::DEFAULT_MIDDLE_CONFLICT_PENALTY,
        }
    }
}
