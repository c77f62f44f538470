//! Property tests for edge construction: weights equal a ground-truth
//! recount, and per-year counts never exceed the weight.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use patnet_core::config::EdgeConfig;
use patnet_core::models::InventorPatentLink;
use patnet_edges::{CoInventorEdgeBuilder, ObservationWindow};

/// patent → (day offset, inventor set)
fn corpus_strategy() -> impl Strategy<Value = Vec<InventorPatentLink>> {
    prop::collection::btree_map(
        0u32..60,
        (0i64..1800, prop::collection::btree_set(0u8..12, 1..6)),
        1..30,
    )
    .prop_map(|patents| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        patents
            .into_iter()
            .flat_map(|(p, (day, inventors))| {
                let applied = base + chrono::Duration::days(day);
                inventors.into_iter().map(move |i| InventorPatentLink {
                    inventor_id: format!("inv_{i:02}"),
                    patent_id: format!("P{p:03}"),
                    application_date: applied,
                    grant_date: applied,
                    affiliation_at_filing: "Org".to_string(),
                })
            })
            .collect()
    })
}

fn naive_weights(links: &[InventorPatentLink]) -> BTreeMap<(String, String), u32> {
    let mut by_patent: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for l in links {
        by_patent.entry(&l.patent_id).or_default().insert(&l.inventor_id);
    }
    let mut weights = BTreeMap::new();
    for members in by_patent.values() {
        for a in members {
            for b in members {
                if a < b {
                    *weights.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
                }
            }
        }
    }
    weights
}

proptest! {
    #[test]
    fn prop_weight_equals_ground_truth(links in corpus_strategy()) {
        let window = ObservationWindow::inferred(links.iter().map(|l| l.application_date.year()));
        let out = CoInventorEdgeBuilder::new(EdgeConfig::default(), window).build_from_links(&links);
        let truth = naive_weights(&links);

        prop_assert_eq!(out.edges.len(), truth.len());
        for e in &out.edges {
            prop_assert!(e.inventor_a < e.inventor_b);
            prop_assert_eq!(truth[&(e.inventor_a.clone(), e.inventor_b.clone())], e.edge_weight);
            prop_assert_eq!(e.shared_patents.len() as u32, e.edge_weight);
            // Inferred window covers every year present.
            prop_assert_eq!(e.windowed_weight(), e.edge_weight);
            prop_assert!(e.first_collaboration_date <= e.last_collaboration_date);
        }
    }

    #[test]
    fn prop_yearly_counts_bounded_by_weight(
        links in corpus_strategy(),
        years in prop::collection::btree_set(2019i32..2026, 1..4),
    ) {
        let window = ObservationWindow::explicit(years.iter().copied());
        let out = CoInventorEdgeBuilder::new(EdgeConfig::default(), window).build_from_links(&links);
        for e in &out.edges {
            prop_assert!(e.windowed_weight() <= e.edge_weight);
            let keys: BTreeSet<i32> = e.yearly_counts.keys().copied().collect();
            prop_assert_eq!(&keys, &years);
        }
    }
}
