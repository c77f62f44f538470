//! Prepared mentions and blocking.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::normalize::ParsedName;

/// A mention that survived parsing, with its canonical affiliation and the
/// block signatures of the other inventors listed on the same patent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRecord {
    /// Trimmed raw name, as listed.
    pub raw_name: String,
    pub parsed: ParsedName,
    pub block_key: String,
    pub patent_id: String,
    pub application_date: NaiveDate,
    pub grant_date: NaiveDate,
    pub affiliation: String,
    pub coinventors: BTreeSet<String>,
}

impl MentionRecord {
    /// `patent_id:raw_name`, the audit subject for this mention.
    pub fn label(&self) -> String {
        format!("{}:{}", self.patent_id, self.raw_name)
    }
}

/// Fill each record's co-inventor set from the other records on its patent.
pub fn attach_coinventors(records: &mut [MentionRecord]) {
    let mut by_patent: BTreeMap<&str, Vec<(usize, &str)>> = BTreeMap::new();
    for (i, r) in records.iter().enumerate() {
        by_patent
            .entry(r.patent_id.as_str())
            .or_default()
            .push((i, r.block_key.as_str()));
    }

    let sets: Vec<BTreeSet<String>> = (0..records.len())
        .map(|i| {
            by_patent
                .get(records[i].patent_id.as_str())
                .map(|team| {
                    team.iter()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, key)| key.to_string())
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect();

    for (record, set) in records.iter_mut().zip(sets) {
        record.coinventors = set;
    }
}

/// Partition record indices by block key.
///
/// Members of a block are ordered by (normalized full name, patent id, raw
/// name, affiliation), so pair enumeration never depends on input order.
pub fn build_blocks(records: &[MentionRecord]) -> BTreeMap<String, Vec<usize>> {
    let mut blocks: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, r) in records.iter().enumerate() {
        blocks.entry(r.block_key.clone()).or_default().push(i);
    }
    for members in blocks.values_mut() {
        members.sort_by_cached_key(|&i| {
            let r = &records[i];
            (
                r.parsed.full(),
                r.patent_id.clone(),
                r.raw_name.clone(),
                r.affiliation.clone(),
            )
        });
    }
    blocks
}
