//! CareerMetricsAggregator: ordered links → CareerMetrics.

use std::collections::{BTreeMap, HashMap};

use patnet_core::constants::TEAM_SIZE_DECIMALS;
use patnet_core::models::{AffiliationSpell, CareerMetrics, InventorPatentLink};
use rayon::prelude::*;
use tracing::info;

use crate::team_sizes::TeamSizes;

/// Stateless aggregator; one call per inventor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerMetricsAggregator;

impl CareerMetricsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Metrics for one inventor. Links are re-ordered by
    /// (application date, patent id) before anything is derived.
    ///
    /// Returns `None` for an empty history.
    pub fn compute(
        &self,
        inventor_id: &str,
        links: &[&InventorPatentLink],
        team_sizes: &TeamSizes,
    ) -> Option<CareerMetrics> {
        let mut ordered: Vec<&InventorPatentLink> = links.to_vec();
        ordered.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
        let first = *ordered.first()?;
        let last = *ordered.last()?;

        let total_team: u64 = ordered
            .iter()
            .map(|l| u64::from(team_sizes.get(&l.patent_id)))
            .sum();
        let avg_team_size = round_to(
            total_team as f64 / ordered.len() as f64,
            TEAM_SIZE_DECIMALS,
        );

        let affiliations: Vec<&str> = ordered
            .iter()
            .map(|l| l.affiliation_at_filing.as_str())
            .collect();
        let org_transitions = affiliations.windows(2).filter(|w| w[0] != w[1]).count();

        let mut affiliation_history: Vec<AffiliationSpell> = Vec::new();
        for link in &ordered {
            if affiliation_history
                .last()
                .is_some_and(|s| s.affiliation == link.affiliation_at_filing)
            {
                continue;
            }
            affiliation_history.push(AffiliationSpell {
                affiliation: link.affiliation_at_filing.clone(),
                first_seen: link.application_date,
            });
        }

        // (count, first position) per affiliation
        let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
        for (pos, &aff) in affiliations.iter().enumerate() {
            tally.entry(aff).or_insert((0, pos)).0 += 1;
        }
        let primary_affiliation = tally
            .iter()
            .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
            .map(|(aff, _)| aff.to_string())
            .unwrap_or_default();

        Some(CareerMetrics {
            inventor_id: inventor_id.to_string(),
            total_patents: ordered.len(),
            career_start_date: first.application_date,
            career_end_date: last.application_date,
            career_span_days: (last.application_date - first.application_date).num_days(),
            first_year: first.application_year(),
            last_year: last.application_year(),
            avg_team_size,
            org_transitions,
            unique_organizations: tally.len(),
            primary_affiliation,
            affiliation_history,
        })
    }

    /// Metrics for every inventor appearing in `links`, sorted by inventor id.
    pub fn compute_all(
        &self,
        links: &[InventorPatentLink],
        team_sizes: &TeamSizes,
    ) -> Vec<CareerMetrics> {
        let _span = tracing::info_span!("patnet.career", links = links.len()).entered();

        let mut by_inventor: BTreeMap<&str, Vec<&InventorPatentLink>> = BTreeMap::new();
        for link in links {
            by_inventor
                .entry(link.inventor_id.as_str())
                .or_default()
                .push(link);
        }

        let groups: Vec<(&str, Vec<&InventorPatentLink>)> = by_inventor.into_iter().collect();
        let mut metrics: Vec<CareerMetrics> = groups
            .par_iter()
            .filter_map(|(id, history)| self.compute(id, history, team_sizes))
            .collect();
        metrics.sort_by(|a, b| a.inventor_id.cmp(&b.inventor_id));

        info!(inventors = metrics.len(), "career metrics computed");
        metrics
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn link(patent: &str, applied: (i32, u32, u32), aff: &str) -> InventorPatentLink {
        let d = NaiveDate::from_ymd_opt(applied.0, applied.1, applied.2).unwrap();
        InventorPatentLink {
            inventor_id: "inv_a".to_string(),
            patent_id: patent.to_string(),
            application_date: d,
            grant_date: d,
            affiliation_at_filing: aff.to_string(),
        }
    }

    fn compute(links: &[InventorPatentLink]) -> CareerMetrics {
        let refs: Vec<&InventorPatentLink> = links.iter().collect();
        CareerMetricsAggregator::new()
            .compute("inv_a", &refs, &TeamSizes::from_links(links))
            .unwrap()
    }

    #[test]
    fn single_patent_career() {
        let m = compute(&[link("P1", (2021, 5, 1), "Meta")]);
        assert_eq!(m.total_patents, 1);
        assert_eq!(m.org_transitions, 0);
        assert_eq!(m.avg_team_size, 1.0);
        assert_eq!(m.career_span_days, 0);
        assert_eq!(m.primary_affiliation, "Meta");
        assert_eq!(m.affiliation_history.len(), 1);
    }

    #[test]
    fn returns_are_counted_as_transitions() {
        let m = compute(&[
            link("P1", (2020, 1, 1), "A"),
            link("P2", (2020, 6, 1), "B"),
            link("P3", (2021, 1, 1), "A"),
        ]);
        assert_eq!(m.org_transitions, 2);
        assert_eq!(m.unique_organizations, 2);
        let history: Vec<&str> = m
            .affiliation_history
            .iter()
            .map(|s| s.affiliation.as_str())
            .collect();
        assert_eq!(history, vec!["A", "B", "A"]);
    }

    #[test]
    fn input_order_is_irrelevant() {
        let m = compute(&[
            link("P3", (2022, 1, 1), "B"),
            link("P1", (2020, 1, 1), "A"),
            link("P2", (2021, 1, 1), "A"),
        ]);
        assert_eq!(m.career_start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(m.career_end_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(m.first_year, 2020);
        assert_eq!(m.last_year, 2022);
        assert_eq!(m.org_transitions, 1);
        assert_eq!(m.affiliation_history[1].first_seen, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
    }

    #[test]
    fn primary_tie_goes_to_earliest() {
        let m = compute(&[
            link("P1", (2020, 1, 1), "B"),
            link("P2", (2020, 2, 1), "A"),
            link("P3", (2020, 3, 1), "A"),
            link("P4", (2020, 4, 1), "B"),
        ]);
        assert_eq!(m.primary_affiliation, "B");
    }

    #[test]
    fn same_day_orders_by_patent_id() {
        let m = compute(&[
            link("P2", (2020, 1, 1), "B"),
            link("P1", (2020, 1, 1), "A"),
        ]);
        assert_eq!(m.affiliation_history[0].affiliation, "A");
        assert_eq!(m.primary_affiliation, "A");
    }

    #[test]
    fn mean_team_size_keeps_two_decimals() {
        let own = [
            link("P1", (2020, 1, 1), "A"),
            link("P2", (2020, 2, 1), "A"),
            link("P3", (2020, 3, 1), "A"),
        ];
        let mut all = own.to_vec();
        for partner in [&own[1], &own[2]] {
            all.push(InventorPatentLink {
                inventor_id: "inv_b".to_string(),
                ..partner.clone()
            });
        }
        let refs: Vec<&InventorPatentLink> = own.iter().collect();
        let m = CareerMetricsAggregator::new()
            .compute("inv_a", &refs, &TeamSizes::from_links(&all))
            .unwrap();
        // (1 + 2 + 2) / 3
        assert_eq!(m.avg_team_size, 1.67);
    }

    #[test]
    fn empty_history_yields_none() {
        let out = CareerMetricsAggregator::new().compute("inv_a", &[], &TeamSizes::default());
        assert!(out.is_none());
    }
}
