//! InventorIdentityResolver: raw mentions → resolved identities + links.

use std::collections::{BTreeSet, HashMap};

use patnet_core::config::{IdentityConfig, OrgConfig};
use patnet_core::errors::ConfigurationError;
use patnet_core::models::{
    AuditEntry, AuditKind, AuditReport, InventorPatentLink, RawMention, ResolvedIdentity,
};
use patnet_core::traits::ICanonicalizer;
use patnet_core::PatnetConfig;
use patnet_orgs::normalize_affiliations;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::blocking::{self, MentionRecord};
use crate::ids;
use crate::normalize::{parse_name, ParsedName};
use crate::similarity::score_pair;
use crate::union_find::UnionFind;

/// Counters for one resolution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub mentions_in: usize,
    pub mentions_dropped: usize,
    pub duplicates_collapsed: usize,
    pub blocks: usize,
    pub comparisons: usize,
    pub merges: usize,
    pub identities: usize,
}

/// Output of [`InventorIdentityResolver::resolve`].
#[derive(Debug, Clone)]
pub struct IdentityResolution {
    /// Sorted by id.
    pub identities: Vec<ResolvedIdentity>,
    /// One per (inventor, patent), sorted by (inventor id, patent id).
    pub links: Vec<InventorPatentLink>,
    pub audit: AuditReport,
    pub stats: ResolutionStats,
}

/// Result of clustering one block.
struct BlockOutcome {
    /// Record indices per class.
    classes: Vec<Vec<usize>>,
    comparisons: usize,
    merges: usize,
    audit: Vec<AuditEntry>,
}

/// Clusters raw inventor mentions into identities.
#[derive(Debug, Clone)]
pub struct InventorIdentityResolver {
    identity: IdentityConfig,
    org: OrgConfig,
}

impl InventorIdentityResolver {
    pub fn new(config: &PatnetConfig) -> Self {
        Self {
            identity: config.identity.clone(),
            org: config.org.clone(),
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.identity
    }

    /// Resolve every mention into a partition of identities.
    ///
    /// Unparseable names and empty organizations are dropped and audited.
    /// The partition, ids, and output order depend only on the mention set
    /// and the configuration, never on input order or thread scheduling.
    pub fn resolve<C: ICanonicalizer + ?Sized>(
        &self,
        mentions: &[RawMention],
        canonicalizer: &C,
    ) -> Result<IdentityResolution, ConfigurationError> {
        let _span = tracing::info_span!("patnet.identity", mentions = mentions.len()).entered();
        let mut audit = AuditReport::new();
        let mut stats = ResolutionStats {
            mentions_in: mentions.len(),
            ..ResolutionStats::default()
        };

        let mut kept: Vec<(ParsedName, &RawMention)> = Vec::with_capacity(mentions.len());
        for m in mentions {
            let subject = format!("{}:{}", m.patent_id, m.raw_name.trim());
            let Some(parsed) = parse_name(&m.raw_name) else {
                audit.record(AuditEntry::new(
                    AuditKind::UnparseableName,
                    subject,
                    "no alphabetic name token; mention dropped",
                ));
                stats.mentions_dropped += 1;
                continue;
            };
            if m.raw_org.trim().is_empty() {
                audit.record(AuditEntry::new(
                    AuditKind::MissingAffiliation,
                    subject,
                    "empty organization; mention dropped",
                ));
                stats.mentions_dropped += 1;
                continue;
            }
            kept.push((parsed, m));
        }

        // Chronological order; also the neighborhood order for inference.
        kept.sort_by(|(_, a), (_, b)| {
            (
                a.application_date,
                a.patent_id.as_str(),
                a.raw_name.trim(),
                a.raw_org.trim(),
            )
                .cmp(&(
                    b.application_date,
                    b.patent_id.as_str(),
                    b.raw_name.trim(),
                    b.raw_org.trim(),
                ))
        });

        let raw_orgs: Vec<&str> = kept.iter().map(|(_, m)| m.raw_org.as_str()).collect();
        let (affiliations, org_audit) =
            normalize_affiliations(canonicalizer, &raw_orgs, &self.org)?;
        audit.extend(org_audit);

        let mut records = self.collapse_duplicates(kept, affiliations, &mut audit, &mut stats);
        blocking::attach_coinventors(&mut records);
        let blocks = blocking::build_blocks(&records);
        stats.blocks = blocks.len();

        let members: Vec<&Vec<usize>> = blocks.values().collect();
        let outcomes: Vec<BlockOutcome> = members
            .par_iter()
            .map(|block| self.resolve_block(&records, block))
            .collect();

        let mut identities = Vec::new();
        let mut links = Vec::with_capacity(records.len());
        for outcome in outcomes {
            stats.comparisons += outcome.comparisons;
            stats.merges += outcome.merges;
            audit.extend(outcome.audit);
            for class in outcome.classes {
                let (identity, class_links) = build_identity(&records, &class);
                identities.push(identity);
                links.extend(class_links);
            }
        }

        identities.sort_by(|a, b| a.id.cmp(&b.id));
        links.sort_by(|a, b| {
            (a.inventor_id.as_str(), a.patent_id.as_str())
                .cmp(&(b.inventor_id.as_str(), b.patent_id.as_str()))
        });
        stats.identities = identities.len();
        audit.finalize();

        info!(
            mentions = stats.mentions_in,
            dropped = stats.mentions_dropped,
            blocks = stats.blocks,
            comparisons = stats.comparisons,
            merges = stats.merges,
            identities = stats.identities,
            "identity resolution complete"
        );

        Ok(IdentityResolution {
            identities,
            links,
            audit,
            stats,
        })
    }

    /// One record per (patent, trimmed raw name). Conflicting affiliations
    /// keep the lexicographically smallest canonical name.
    fn collapse_duplicates(
        &self,
        kept: Vec<(ParsedName, &RawMention)>,
        affiliations: Vec<String>,
        audit: &mut AuditReport,
        stats: &mut ResolutionStats,
    ) -> Vec<MentionRecord> {
        let mut records: Vec<MentionRecord> = Vec::with_capacity(kept.len());
        let mut seen: HashMap<(String, String), usize> = HashMap::new();

        for ((parsed, m), affiliation) in kept.into_iter().zip(affiliations) {
            let raw_name = m.raw_name.trim().to_string();
            let key = (m.patent_id.clone(), raw_name.clone());
            if let Some(&idx) = seen.get(&key) {
                stats.duplicates_collapsed += 1;
                let existing = &mut records[idx];
                if existing.affiliation != affiliation {
                    let (low, high) = if affiliation < existing.affiliation {
                        (affiliation, existing.affiliation.clone())
                    } else {
                        (existing.affiliation.clone(), affiliation)
                    };
                    audit.record(AuditEntry::new(
                        AuditKind::ConflictingAffiliation,
                        existing.label(),
                        format!("listed under '{low}' and '{high}'; kept '{low}'"),
                    ));
                    existing.affiliation = low;
                }
                continue;
            }

            seen.insert(key, records.len());
            records.push(MentionRecord {
                raw_name,
                block_key: parsed.block_key(),
                parsed,
                patent_id: m.patent_id.clone(),
                application_date: m.application_date,
                grant_date: m.grant_date,
                affiliation,
                coinventors: BTreeSet::new(),
            });
        }

        if stats.duplicates_collapsed > 0 {
            debug!(
                collapsed = stats.duplicates_collapsed,
                "duplicate listings collapsed"
            );
        }
        records
    }

    /// Greedy pairwise merging within one block. Classes that already share
    /// a patent are never joined.
    fn resolve_block(&self, records: &[MentionRecord], members: &[usize]) -> BlockOutcome {
        let config = &self.identity;
        let n = members.len();
        let mut uf = UnionFind::new(n);
        let mut patents: Vec<BTreeSet<&str>> = members
            .iter()
            .map(|&i| BTreeSet::from([records[i].patent_id.as_str()]))
            .collect();
        let mut comparisons = 0;
        let mut merges = 0;
        let mut audit = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&records[members[i]], &records[members[j]]);
                if a.patent_id == b.patent_id {
                    continue;
                }
                comparisons += 1;
                let score = score_pair(a, b, config);
                if score.is_ambiguous(config) {
                    audit.push(AuditEntry::new(
                        AuditKind::ThresholdAmbiguity,
                        format!("{} ~ {}", a.label(), b.label()),
                        format!(
                            "score {:.3} within {:.3} of threshold {:.3}",
                            score.total, config.ambiguity_margin, config.merge_threshold
                        ),
                    ));
                }
                if !score.merges(config) {
                    continue;
                }

                let (ra, rb) = (uf.find(i), uf.find(j));
                if ra == rb {
                    continue;
                }
                if !patents[ra].is_disjoint(&patents[rb]) {
                    debug!(a = %a.label(), b = %b.label(), "merge blocked by shared patent");
                    continue;
                }
                let root = uf.union(ra, rb);
                let absorbed = if root == ra { rb } else { ra };
                let moved = std::mem::take(&mut patents[absorbed]);
                patents[root].extend(moved);
                merges += 1;
            }
        }

        let classes = uf
            .groups()
            .into_iter()
            .map(|group| group.into_iter().map(|k| members[k]).collect())
            .collect();

        BlockOutcome {
            classes,
            comparisons,
            merges,
            audit,
        }
    }
}

fn build_identity(
    records: &[MentionRecord],
    class: &[usize],
) -> (ResolvedIdentity, Vec<InventorPatentLink>) {
    let id = ids::inventor_id(
        class
            .iter()
            .map(|&i| (records[i].patent_id.as_str(), records[i].raw_name.as_str())),
    );
    let name_variants: BTreeSet<String> =
        class.iter().map(|&i| records[i].raw_name.clone()).collect();
    let display_name = name_variants.first().cloned().unwrap_or_default();

    let links = class
        .iter()
        .map(|&i| {
            let r = &records[i];
            InventorPatentLink {
                inventor_id: id.clone(),
                patent_id: r.patent_id.clone(),
                application_date: r.application_date,
                grant_date: r.grant_date,
                affiliation_at_filing: r.affiliation.clone(),
            }
        })
        .collect();

    let identity = ResolvedIdentity {
        id,
        display_name,
        name_variants,
        mention_count: class.len(),
    };
    (identity, links)
}
