use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AffiliationSpell, CareerMetrics, ResolvedIdentity};

/// A resolved inventor joined with its career metrics. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventor {
    pub id: String,
    pub display_name: String,
    pub name_variants: BTreeSet<String>,
    pub mention_count: usize,
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

impl Inventor {
    /// Join an identity with its metrics. The caller guarantees the ids match.
    pub fn from_parts(identity: ResolvedIdentity, metrics: CareerMetrics) -> Self {
        debug_assert_eq!(identity.id, metrics.inventor_id);
        Self {
            id: identity.id,
            display_name: identity.display_name,
            name_variants: identity.name_variants,
            mention_count: identity.mention_count,
            total_patents: metrics.total_patents,
            career_start_date: metrics.career_start_date,
            career_end_date: metrics.career_end_date,
            career_span_days: metrics.career_span_days,
            first_year: metrics.first_year,
            last_year: metrics.last_year,
            avg_team_size: metrics.avg_team_size,
            org_transitions: metrics.org_transitions,
            unique_organizations: metrics.unique_organizations,
            primary_affiliation: metrics.primary_affiliation,
            affiliation_history: metrics.affiliation_history,
        }
    }
}
