//! Property tests for alias canonicalization.

use proptest::prelude::*;

use patnet_core::errors::ConfigurationError;
use patnet_core::models::{AliasEdge, RelationshipType};
use patnet_core::traits::ICanonicalizer;
use patnet_orgs::OrgAliasResolver;

fn org(i: usize) -> String {
    format!("Org {i}")
}

/// Forward-only successor choices: node i may point at some j > i.
fn forest_strategy(n: usize) -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(0..n), n)
}

fn build_rows(successors: &[Option<usize>]) -> Vec<AliasEdge> {
    successors
        .iter()
        .enumerate()
        .filter_map(|(i, succ)| {
            succ.filter(|&j| j > i)
                .map(|j| AliasEdge::new(org(i), org(j), RelationshipType::Subsidiary))
        })
        .collect()
}

proptest! {
    #[test]
    fn acyclic_chains_resolve_to_a_root(successors in forest_strategy(25)) {
        let rows = build_rows(&successors);
        let resolver = OrgAliasResolver::new(&rows).unwrap();
        for i in 0..successors.len() {
            let name = resolver.canonicalize(&org(i)).unwrap();
            if rows.iter().any(|r| r.observed_name == org(i) || r.canonical_form == org(i)) {
                prop_assert!(resolver.is_canonical(&name), "{} resolved to non-root {}", org(i), name);
            } else {
                prop_assert_eq!(name, org(i));
            }
        }
    }

    #[test]
    fn closing_any_chain_into_a_loop_is_rejected(len in 2_usize..12, back_to in 0_usize..12) {
        let back_to = back_to % len;
        let mut rows: Vec<AliasEdge> = (0..len - 1)
            .map(|i| AliasEdge::new(org(i), org(i + 1), RelationshipType::Merger))
            .collect();
        rows.push(AliasEdge::new(org(len - 1), org(back_to), RelationshipType::Acquisition));

        let result = OrgAliasResolver::new(&rows);
        if back_to == len - 1 {
            // A self-edge declares the tail self-canonical.
            prop_assert!(result.is_ok());
        } else {
            let is_cycle = matches!(result, Err(ConfigurationError::AliasCycle { .. }));
            prop_assert!(is_cycle);
        }
    }
}
