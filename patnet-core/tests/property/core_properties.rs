//! Property tests for core models and configuration validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use patnet_core::config::FilterConfig;
use patnet_core::models::{canonical_pair, AuditEntry, AuditKind, AuditReport};
use patnet_core::PatnetConfig;

const KINDS: [AuditKind; 4] = [
    AuditKind::UnparseableName,
    AuditKind::UnknownPatent,
    AuditKind::UnmappedOrganization,
    AuditKind::ThresholdAmbiguity,
];

fn entry_strategy() -> impl Strategy<Value = AuditEntry> {
    (0..KINDS.len(), 0u8..5, 0u8..3).prop_map(|(k, subject, detail)| {
        AuditEntry::new(KINDS[k], format!("S{subject}"), format!("d{detail}"))
    })
}

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset)
}

proptest! {
    #[test]
    fn prop_finalized_report_is_sorted_unique_and_order_free(
        entries in prop::collection::vec(entry_strategy(), 0..40),
    ) {
        let mut forward = AuditReport::new();
        forward.extend(entries.iter().cloned());
        forward.finalize();

        let mut backward = AuditReport::new();
        backward.extend(entries.iter().rev().cloned());
        backward.finalize();

        prop_assert_eq!(&forward, &backward);
        prop_assert!(forward.entries.windows(2).all(|w| w[0] < w[1]));
        let total: usize = forward.counts().values().sum();
        prop_assert_eq!(total, forward.len());

        let mut again = forward.clone();
        again.finalize();
        prop_assert_eq!(again, forward);
    }

    #[test]
    fn prop_canonical_pair_is_symmetric(a in "[a-f0-9]{1,6}", b in "[a-f0-9]{1,6}") {
        let (lo, hi) = canonical_pair(&a, &b);
        prop_assert!(lo <= hi);
        prop_assert_eq!(canonical_pair(&b, &a), (lo, hi));
    }

    #[test]
    fn prop_weights_summing_to_one_validate(w1 in 0.0f64..1.0, share in 0.0f64..1.0) {
        let mut config = PatnetConfig::default();
        config.identity.name_weight = w1;
        config.identity.affiliation_weight = (1.0 - w1) * share;
        config.identity.coinventor_weight = (1.0 - w1) * (1.0 - share);
        prop_assert!(config.validate().is_ok());

        config.identity.coinventor_weight += 0.01;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_team_cap_below_two_is_rejected(cap in 0usize..2) {
        let mut config = PatnetConfig::default();
        config.edges.max_team_size = Some(cap);
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_filter_contains_matches_bounds(
        start in prop::option::of(0i64..400),
        len in 0i64..400,
        query_day in -50i64..900,
    ) {
        let filter = FilterConfig {
            start_date: start.map(day),
            end_date: start.map(|s| day(s + len)),
        };
        let d = day(query_day);
        let expected = match start {
            Some(s) => query_day >= s && query_day <= s + len,
            None => true,
        };
        prop_assert_eq!(filter.contains(d), expected);
    }
}
