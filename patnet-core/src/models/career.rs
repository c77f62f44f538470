use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A run of consecutive patents filed under one affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationSpell {
    pub affiliation: String,
    pub first_seen: NaiveDate,
}

/// Derived per-inventor statistics over the ordered patent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMetrics {
    pub inventor_id: String,
    pub total_patents: usize,
    pub career_start_date: NaiveDate,
    pub career_end_date: NaiveDate,
    pub career_span_days: i64,
    pub first_year: i32,
    pub last_year: i32,
    pub avg_team_size: f64,
    pub org_transitions: usize,
    pub unique_organizations: usize,
    pub primary_affiliation: String,
    pub affiliation_history: Vec<AffiliationSpell>,
}
