//! Property tests for career metrics.

use chrono::NaiveDate;
use proptest::prelude::*;

use patnet_career::{CareerMetricsAggregator, TeamSizes};
use patnet_core::models::InventorPatentLink;

fn history_strategy() -> impl Strategy<Value = Vec<InventorPatentLink>> {
    prop::collection::btree_map(0u32..500, (0i64..2000, 0usize..4), 1..25).prop_map(|m| {
        m.into_iter()
            .map(|(p, (day, org))| {
                let applied = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap() + chrono::Duration::days(day);
                InventorPatentLink {
                    inventor_id: "inv_x".to_string(),
                    patent_id: format!("P{p:04}"),
                    application_date: applied,
                    grant_date: applied,
                    affiliation_at_filing: ["A", "B", "C", "D"][org].to_string(),
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_history_shape(links in history_strategy()) {
        let refs: Vec<&InventorPatentLink> = links.iter().collect();
        let m = CareerMetricsAggregator::new()
            .compute("inv_x", &refs, &TeamSizes::from_links(&links))
            .unwrap();

        prop_assert_eq!(m.total_patents, links.len());
        prop_assert!(m.org_transitions < links.len());
        prop_assert_eq!(m.affiliation_history.len(), m.org_transitions + 1);
        prop_assert!(m.unique_organizations <= m.affiliation_history.len());
        prop_assert!(m.career_start_date <= m.career_end_date);
        prop_assert!(m.career_span_days >= 0);
        prop_assert!(m
            .affiliation_history
            .windows(2)
            .all(|w| w[0].affiliation != w[1].affiliation && w[0].first_seen <= w[1].first_seen));
        prop_assert!(m
            .affiliation_history
            .iter()
            .any(|s| s.affiliation == m.primary_affiliation));
    }

    #[test]
    fn prop_order_independent(links in history_strategy()) {
        let sizes = TeamSizes::from_links(&links);
        let forward: Vec<&InventorPatentLink> = links.iter().collect();
        let backward: Vec<&InventorPatentLink> = links.iter().rev().collect();
        let agg = CareerMetricsAggregator::new();
        prop_assert_eq!(
            agg.compute("inv_x", &forward, &sizes),
            agg.compute("inv_x", &backward, &sizes)
        );
    }
}
