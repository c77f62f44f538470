//! NetworkPipeline: config → aliases → identities → {careers, edges} → snapshot.

use std::collections::{HashMap, HashSet};

use patnet_career::{CareerMetricsAggregator, TeamSizes};
use patnet_core::errors::{ConfigurationError, PatnetResult};
use patnet_core::models::{
    AliasEdge, AuditEntry, AuditKind, AuditReport, InventorPatentLink, Patent, PatentRecord,
    RawMention,
};
use patnet_core::PatnetConfig;
use patnet_edges::{CoInventorEdgeBuilder, ObservationWindow};
use patnet_identity::InventorIdentityResolver;
use patnet_orgs::{canonicalize_batch, OrgAliasResolver};
use tracing::{info, warn};

use crate::assembler::{NetworkAssembler, NetworkParts};
use crate::input::PipelineInput;
use crate::snapshot::NetworkSnapshot;

/// A validated snapshot plus every warning raised on the way.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub snapshot: NetworkSnapshot,
    pub audit: AuditReport,
}

/// One configured run. The alias table is validated at construction, so a
/// bad table fails before any record is touched.
#[derive(Debug, Clone)]
pub struct NetworkPipeline {
    config: PatnetConfig,
    orgs: OrgAliasResolver,
}

impl NetworkPipeline {
    pub fn new(config: PatnetConfig, aliases: &[AliasEdge]) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let orgs = OrgAliasResolver::from_config(aliases, &config.org)?;
        Ok(Self { config, orgs })
    }

    /// Build and execute in one call.
    pub fn run(config: &PatnetConfig, input: &PipelineInput) -> PatnetResult<PipelineOutput> {
        Self::new(config.clone(), &input.aliases)?.execute(&input.patents, &input.mentions)
    }

    pub fn config(&self) -> &PatnetConfig {
        &self.config
    }

    pub fn org_resolver(&self) -> &OrgAliasResolver {
        &self.orgs
    }

    pub fn execute(
        &self,
        patents: &[PatentRecord],
        mentions: &[RawMention],
    ) -> PatnetResult<PipelineOutput> {
        let _span = tracing::info_span!(
            "patnet.pipeline",
            patents = patents.len(),
            mentions = mentions.len()
        )
        .entered();
        let filter = &self.config.filter;
        let mut audit = AuditReport::new();

        let (mentions, orphans) = scope_mentions(patents, mentions);
        audit.extend(orphans);
        let patents: Vec<&PatentRecord> = patents
            .iter()
            .filter(|p| filter.contains(p.application_date))
            .collect();
        let in_scope: HashSet<&str> = patents.iter().map(|p| p.patent_id.as_str()).collect();
        let mentions: Vec<RawMention> = mentions
            .into_iter()
            .filter(|m| in_scope.contains(m.patent_id.as_str()))
            .collect();
        if !filter.is_unbounded() {
            info!(
                patents = patents.len(),
                mentions = mentions.len(),
                start = ?filter.start_date,
                end = ?filter.end_date,
                "date filter applied"
            );
        }

        let assignees: Vec<&str> = patents.iter().map(|p| p.raw_assignee.as_str()).collect();
        let (assignees, assignee_audit) = canonicalize_batch(&self.orgs, &assignees)?;
        audit.extend(assignee_audit);

        let identity = InventorIdentityResolver::new(&self.config).resolve(&mentions, &self.orgs)?;
        audit.merge(identity.audit);
        let links = identity.links;

        let patents = complete_patents(&patents, assignees.into_iter().map(|c| c.name), &links);
        let window = ObservationWindow::from_config(
            &self.config.window,
            patents.iter().map(Patent::application_year),
        );
        let team_sizes = TeamSizes::new(&patents, &links);
        let edge_builder = CoInventorEdgeBuilder::new(self.config.edges.clone(), window.clone());

        let (metrics, edge_build) = rayon::join(
            || CareerMetricsAggregator::new().compute_all(&links, &team_sizes),
            || edge_builder.build_for_patents(&patents, &links),
        );
        audit.extend(edge_build.audit);

        let snapshot = NetworkAssembler::new(&self.config.assembly).assemble(NetworkParts {
            identities: identity.identities,
            links,
            metrics,
            edges: edge_build.edges,
            patents,
            window: window.years().to_vec(),
            skipped_patents: edge_build.skipped_patents,
        })?;
        audit.finalize();

        let summary = snapshot.summary();
        info!(
            inventors = summary.inventors,
            edges = summary.edges,
            links = summary.links,
            patents = summary.patents,
            warnings = audit.len(),
            "pipeline complete"
        );

        Ok(PipelineOutput { snapshot, audit })
    }
}

/// Mentions dated by their patent record. Mentions whose patent is absent
/// from `patents` are dropped and audited.
fn scope_mentions(
    patents: &[PatentRecord],
    mentions: &[RawMention],
) -> (Vec<RawMention>, Vec<AuditEntry>) {
    let by_id: HashMap<&str, &PatentRecord> = patents
        .iter()
        .map(|p| (p.patent_id.as_str(), p))
        .collect();
    let mut kept = Vec::with_capacity(mentions.len());
    let mut audit = Vec::new();
    for m in mentions {
        match by_id.get(m.patent_id.as_str()) {
            Some(patent) => kept.push(RawMention {
                application_date: patent.application_date,
                grant_date: patent.grant_date,
                ..m.clone()
            }),
            None => audit.push(AuditEntry::new(
                AuditKind::UnknownPatent,
                format!("{}:{}", m.patent_id, m.raw_name.trim()),
                "patent not in the patent records; mention dropped",
            )),
        }
    }
    if !audit.is_empty() {
        warn!(dropped = audit.len(), "mentions reference unknown patents");
    }
    (kept, audit)
}

/// Canonical assignee plus inventor count, filled from the link count when
/// the record reports none.
fn complete_patents(
    records: &[&PatentRecord],
    assignees: impl Iterator<Item = String>,
    links: &[InventorPatentLink],
) -> Vec<Patent> {
    let mut link_counts: HashMap<&str, u32> = HashMap::new();
    for link in links {
        *link_counts.entry(link.patent_id.as_str()).or_insert(0) += 1;
    }

    let mut patents: Vec<Patent> = records
        .iter()
        .zip(assignees)
        .map(|(r, assignee)| Patent {
            patent_id: r.patent_id.clone(),
            title: r.title.clone(),
            grant_date: r.grant_date,
            application_date: r.application_date,
            assignee_organization: assignee,
            inventor_count: if r.inventor_count > 0 {
                r.inventor_count
            } else {
                link_counts.get(r.patent_id.as_str()).copied().unwrap_or(0)
            },
            citation_count: r.citation_count,
        })
        .collect();
    patents.sort_by(|a, b| a.patent_id.cmp(&b.patent_id));
    patents
}
