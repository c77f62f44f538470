//! CoInventorEdgeBuilder: patent teams → aggregated collaboration edges.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use patnet_core::config::EdgeConfig;
use patnet_core::models::{AuditEntry, AuditKind, CollaborationEdge, InventorPatentLink, Patent};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::teams::{teams_for_patents, teams_from_links, PatentTeam};
use crate::window::ObservationWindow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeBuildStats {
    pub patents_seen: usize,
    pub patents_capped: usize,
    /// Pair observations before aggregation.
    pub observations: usize,
    pub edges: usize,
}

/// Edges sorted by (inventor_a, inventor_b), plus audit entries for skipped
/// patents.
#[derive(Debug, Clone, Default)]
pub struct EdgeBuild {
    pub edges: Vec<CollaborationEdge>,
    /// Patents left out for exceeding the team-size cap, sorted.
    pub skipped_patents: Vec<String>,
    pub audit: Vec<AuditEntry>,
    pub stats: EdgeBuildStats,
}

/// Running aggregate for one canonical pair.
#[derive(Debug)]
struct PairAccumulator<'a> {
    patents: BTreeMap<&'a str, NaiveDate>,
}

impl PairAccumulator<'_> {
    fn into_edge(self, a: &str, b: &str, window: &ObservationWindow) -> Option<CollaborationEdge> {
        let first = *self.patents.values().min()?;
        let last = *self.patents.values().max()?;
        let mut yearly_counts: BTreeMap<i32, u32> =
            window.years().iter().map(|&y| (y, 0)).collect();
        for date in self.patents.values() {
            if let Some(count) = yearly_counts.get_mut(&date.year()) {
                *count += 1;
            }
        }
        Some(CollaborationEdge {
            inventor_a: a.to_string(),
            inventor_b: b.to_string(),
            edge_weight: self.patents.len() as u32,
            shared_patents: self.patents.keys().map(|p| p.to_string()).collect(),
            first_collaboration_date: first,
            last_collaboration_date: last,
            first_year: first.year(),
            last_year: last.year(),
            yearly_counts,
        })
    }
}

/// Expands teams into pairs and aggregates them against a frozen window.
#[derive(Debug, Clone)]
pub struct CoInventorEdgeBuilder {
    config: EdgeConfig,
    window: ObservationWindow,
}

impl CoInventorEdgeBuilder {
    pub fn new(config: EdgeConfig, window: ObservationWindow) -> Self {
        Self { config, window }
    }

    pub fn window(&self) -> &ObservationWindow {
        &self.window
    }

    /// Build edges straight from resolved links, dated by link.
    pub fn build_from_links(&self, links: &[InventorPatentLink]) -> EdgeBuild {
        self.build(&teams_from_links(links))
    }

    /// Build edges from resolved links, dating every observation by its
    /// patent's application date.
    pub fn build_for_patents(&self, patents: &[Patent], links: &[InventorPatentLink]) -> EdgeBuild {
        self.build(&teams_for_patents(patents, links))
    }

    /// Build edges from patent teams.
    ///
    /// Each patent contributes at most one observation per pair, so
    /// `edge_weight` counts distinct shared patents.
    pub fn build(&self, teams: &[PatentTeam<'_>]) -> EdgeBuild {
        let _span = tracing::info_span!("patnet.edges", patents = teams.len()).entered();
        let mut stats = EdgeBuildStats {
            patents_seen: teams.len(),
            ..EdgeBuildStats::default()
        };
        let mut audit = Vec::new();
        let mut skipped_patents = Vec::new();

        let mut eligible: Vec<&PatentTeam<'_>> = Vec::with_capacity(teams.len());
        for team in teams {
            match self.config.max_team_size {
                Some(cap) if team.size() > cap => {
                    warn!(
                        patent = team.patent_id,
                        inventors = team.size(),
                        cap,
                        "team exceeds cap; patent skipped"
                    );
                    audit.push(AuditEntry::new(
                        AuditKind::TeamSizeCapped,
                        team.patent_id,
                        format!("{} inventors exceeds cap of {cap}", team.size()),
                    ));
                    skipped_patents.push(team.patent_id.to_string());
                    stats.patents_capped += 1;
                }
                _ => eligible.push(team),
            }
        }

        let observations: Vec<(&str, &str, &str, NaiveDate)> = eligible
            .par_iter()
            .flat_map_iter(|team| pairs(team))
            .collect();
        stats.observations = observations.len();

        let mut by_pair: BTreeMap<(&str, &str), PairAccumulator<'_>> = BTreeMap::new();
        for (a, b, patent, date) in observations {
            by_pair
                .entry((a, b))
                .or_insert_with(|| PairAccumulator {
                    patents: BTreeMap::new(),
                })
                .patents
                .insert(patent, date);
        }

        let edges: Vec<CollaborationEdge> = by_pair
            .into_iter()
            .filter_map(|((a, b), acc)| acc.into_edge(a, b, &self.window))
            .collect();
        stats.edges = edges.len();

        info!(
            patents = stats.patents_seen,
            capped = stats.patents_capped,
            observations = stats.observations,
            edges = stats.edges,
            window = ?self.window.years(),
            "collaboration edges built"
        );

        skipped_patents.sort();

        EdgeBuild {
            edges,
            skipped_patents,
            audit,
            stats,
        }
    }
}

/// All C(k,2) canonical pairs on one patent.
fn pairs<'a>(team: &PatentTeam<'a>) -> Vec<(&'a str, &'a str, &'a str, NaiveDate)> {
    let inventors: Vec<&'a str> = team.inventors.iter().copied().collect();
    let mut out = Vec::with_capacity(inventors.len() * inventors.len().saturating_sub(1) / 2);
    for (i, a) in inventors.iter().enumerate() {
        for b in &inventors[i + 1..] {
            out.push((*a, *b, team.patent_id, team.application_date));
        }
    }
    out
}

/// Recount shared patents per canonical pair directly from links.
pub fn recount_weights(links: &[InventorPatentLink]) -> BTreeMap<(String, String), u32> {
    let mut counts = BTreeMap::new();
    for team in teams_from_links(links) {
        let members: Vec<&str> = team.inventors.into_iter().collect();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                *counts.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
            }
        }
    }
    counts
}
