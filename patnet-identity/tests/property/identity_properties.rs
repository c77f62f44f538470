//! Property tests for identity resolution: link coverage and order
//! independence.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use patnet_core::models::RawMention;
use patnet_core::PatnetConfig;
use patnet_identity::InventorIdentityResolver;
use patnet_orgs::OrgAliasResolver;

const FIRST: &[&str] = &["John", "J.", "Jon", "Ann", "A.", "Wei", "Maria"];
const LAST: &[&str] = &["Smith", "Lee", "Chen", "Garcia"];
const ORGS: &[&str] = &["Org A", "Org B", "Org C"];

fn mention_strategy() -> impl Strategy<Value = RawMention> {
    (0..FIRST.len(), 0..LAST.len(), 0..ORGS.len(), 0u32..12, 0i64..1500).prop_map(
        |(f, l, o, p, day)| {
            let applied = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(day);
            RawMention {
                raw_name: format!("{} {}", FIRST[f], LAST[l]),
                raw_org: ORGS[o].to_string(),
                patent_id: format!("P{p}"),
                application_date: applied,
                grant_date: applied + chrono::Duration::days(365),
            }
        },
    )
}

/// Keep one application date per patent, as real filings have.
fn consistent_dates(mut mentions: Vec<RawMention>) -> Vec<RawMention> {
    let mut by_patent = std::collections::HashMap::new();
    for m in &mut mentions {
        let (applied, granted) = *by_patent
            .entry(m.patent_id.clone())
            .or_insert((m.application_date, m.grant_date));
        m.application_date = applied;
        m.grant_date = granted;
    }
    mentions
}

proptest! {
    #[test]
    fn prop_links_cover_exactly_the_mention_patents(
        mentions in prop::collection::vec(mention_strategy(), 1..40)
    ) {
        let mentions = consistent_dates(mentions);
        let resolver = InventorIdentityResolver::new(&PatnetConfig::default());
        let orgs = OrgAliasResolver::new(&[]).unwrap();
        let out = resolver.resolve(&mentions, &orgs).unwrap();

        let mention_keys: BTreeSet<(String, String)> = mentions
            .iter()
            .map(|m| (m.patent_id.clone(), m.raw_name.trim().to_string()))
            .collect();
        prop_assert_eq!(out.links.len(), mention_keys.len());

        let mention_patents: BTreeSet<&str> = mentions.iter().map(|m| m.patent_id.as_str()).collect();
        let link_patents: BTreeSet<&str> = out.links.iter().map(|l| l.patent_id.as_str()).collect();
        prop_assert_eq!(mention_patents, link_patents);

        // No inventor is linked twice to one patent.
        let pairs: BTreeSet<(&str, &str)> = out
            .links
            .iter()
            .map(|l| (l.inventor_id.as_str(), l.patent_id.as_str()))
            .collect();
        prop_assert_eq!(pairs.len(), out.links.len());

        let total_mentions: usize = out.identities.iter().map(|i| i.mention_count).sum();
        prop_assert_eq!(total_mentions, out.links.len());
    }

    #[test]
    fn prop_resolution_ignores_input_order(
        mentions in prop::collection::vec(mention_strategy(), 1..30)
    ) {
        let mentions = consistent_dates(mentions);
        let resolver = InventorIdentityResolver::new(&PatnetConfig::default());
        let orgs = OrgAliasResolver::new(&[]).unwrap();
        let forward = resolver.resolve(&mentions, &orgs).unwrap();

        let mut reversed = mentions.clone();
        reversed.reverse();
        let backward = resolver.resolve(&reversed, &orgs).unwrap();

        prop_assert_eq!(forward.identities, backward.identities);
        prop_assert_eq!(forward.links, backward.links);
        prop_assert_eq!(forward.audit, backward.audit);
    }
}
