//! Pairwise mention similarity.
//!
//! Three signals, each in [0, 1]: name edit similarity, shared canonical
//! affiliation within a time window, and co-inventor set overlap within the
//! same window. The weighted sum is compared against the merge threshold.
//!
//! Mentions filed further apart than the window merge only with evidence
//! beyond the name: the same canonical affiliation or a shared co-inventor.

use std::collections::BTreeSet;

use patnet_core::config::IdentityConfig;

use crate::blocking::MentionRecord;
use crate::normalize::ParsedName;

/// Component scores for one mention pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub name: f64,
    pub affiliation: f64,
    pub coinventor: f64,
    pub total: f64,
    /// Filed within the window, or backed by a shared affiliation or
    /// co-inventor regardless of the gap.
    pub corroborated: bool,
}

impl PairScore {
    pub fn merges(&self, config: &IdentityConfig) -> bool {
        self.corroborated
            && self.name >= config.min_name_similarity
            && self.total >= config.merge_threshold
    }

    /// Score sits within the ambiguity margin of the threshold.
    pub fn is_ambiguous(&self, config: &IdentityConfig) -> bool {
        self.corroborated
            && self.name >= config.min_name_similarity
            && (self.total - config.merge_threshold).abs() <= config.ambiguity_margin + 1e-9
    }
}

/// Score two prepared mentions.
pub fn score_pair(a: &MentionRecord, b: &MentionRecord, config: &IdentityConfig) -> PairScore {
    let name = name_similarity(&a.parsed, &b.parsed, config);
    let in_window =
        (a.application_date - b.application_date).num_days().abs() <= config.affiliation_window_days;
    let affiliation = if in_window {
        affiliation_overlap(&a.affiliation, &b.affiliation)
    } else {
        0.0
    };
    let coinventor = if in_window {
        jaccard(&a.coinventors, &b.coinventors)
    } else {
        0.0
    };
    let total = config.name_weight * name
        + config.affiliation_weight * affiliation
        + config.coinventor_weight * coinventor;
    let corroborated = in_window
        || affiliation_overlap(&a.affiliation, &b.affiliation) > 0.0
        || !a.coinventors.is_disjoint(&b.coinventors);
    PairScore {
        name,
        affiliation,
        coinventor,
        total,
        corroborated,
    }
}

/// Name similarity over `first last`, with initial expansion.
///
/// A bare initial matching the other first name's first letter counts as
/// the same first name, scaled by `initial_match_penalty`. Two different
/// spelled-out first names cap the result at their own edit similarity.
/// Two present but different middle initials scale by
/// `middle_conflict_penalty`.
pub fn name_similarity(a: &ParsedName, b: &ParsedName, config: &IdentityConfig) -> f64 {
    let mut factor = 1.0;
    let mut cap = 1.0;
    let (first_a, first_b) = if a.first == b.first {
        (a.first.as_str(), b.first.as_str())
    } else if is_initial_of(&a.first, &b.first) || is_initial_of(&b.first, &a.first) {
        factor *= config.initial_match_penalty;
        let longer = if a.first.len() >= b.first.len() {
            a.first.as_str()
        } else {
            b.first.as_str()
        };
        (longer, longer)
    } else {
        cap = edit_similarity(&a.first, &b.first);
        (a.first.as_str(), b.first.as_str())
    };

    if let (Some(ma), Some(mb)) = (a.middle_initial(), b.middle_initial()) {
        if ma != mb {
            factor *= config.middle_conflict_penalty;
        }
    }

    let full_a = format!("{first_a} {}", a.last);
    let full_b = format!("{first_b} {}", b.last);
    edit_similarity(&full_a, &full_b).min(cap) * factor
}

fn is_initial_of(initial: &str, name: &str) -> bool {
    let mut chars = initial.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => name.starts_with(c),
        _ => false,
    }
}

/// `1 - levenshtein / max_len`; two empty strings are identical.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Levenshtein distance over chars, two rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// 1.0 when both mentions carry the same non-empty canonical affiliation.
pub fn affiliation_overlap(a: &str, b: &str) -> f64 {
    if !a.is_empty() && a == b {
        1.0
    } else {
        0.0
    }
}

/// J(A, B) = |A ∩ B| / |A ∪ B|. Returns 0.0 if both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
