//! NetworkAssembler: joins stage outputs and enforces referential integrity.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use patnet_core::config::AssemblyConfig;
use patnet_core::errors::IntegrityError;
use patnet_core::models::{
    CareerMetrics, CollaborationEdge, Inventor, InventorPatentLink, Patent, ResolvedIdentity,
};
use tracing::info;

use crate::snapshot::NetworkSnapshot;

/// Everything the earlier stages produced.
#[derive(Debug, Clone, Default)]
pub struct NetworkParts {
    pub identities: Vec<ResolvedIdentity>,
    pub links: Vec<InventorPatentLink>,
    pub metrics: Vec<CareerMetrics>,
    pub edges: Vec<CollaborationEdge>,
    pub patents: Vec<Patent>,
    pub window: Vec<i32>,
    /// Patents excluded from edge construction; left out of weight checks.
    pub skipped_patents: Vec<String>,
}

/// Validates and freezes a network. Any violation fails the whole run.
#[derive(Debug, Clone, Default)]
pub struct NetworkAssembler {
    config: AssemblyConfig,
}

impl NetworkAssembler {
    pub fn new(config: &AssemblyConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn assemble(&self, parts: NetworkParts) -> Result<NetworkSnapshot, IntegrityError> {
        let _span = tracing::info_span!(
            "patnet.assembly",
            identities = parts.identities.len(),
            links = parts.links.len(),
            edges = parts.edges.len()
        )
        .entered();

        let NetworkParts {
            identities,
            mut links,
            metrics,
            mut edges,
            mut patents,
            window,
            skipped_patents,
        } = parts;

        let mut metrics_by_id: HashMap<String, CareerMetrics> = metrics
            .into_iter()
            .map(|m| (m.inventor_id.clone(), m))
            .collect();

        let mut known: HashSet<String> = HashSet::with_capacity(identities.len());
        let mut inventors = Vec::with_capacity(identities.len());
        for identity in identities {
            if !known.insert(identity.id.clone()) {
                return Err(IntegrityError::DuplicateInventor {
                    inventor_id: identity.id,
                });
            }
            let Some(m) = metrics_by_id.remove(&identity.id) else {
                return Err(IntegrityError::MissingCareerMetrics {
                    inventor_id: identity.id,
                });
            };
            inventors.push(Inventor::from_parts(identity, m));
        }

        let patent_ids: HashSet<&str> = patents.iter().map(|p| p.patent_id.as_str()).collect();
        let mut seen_links: HashSet<(&str, &str)> = HashSet::with_capacity(links.len());
        for link in &links {
            if !known.contains(&link.inventor_id) {
                return Err(IntegrityError::UnknownLinkInventor {
                    inventor_id: link.inventor_id.clone(),
                    patent_id: link.patent_id.clone(),
                });
            }
            if !patent_ids.contains(link.patent_id.as_str()) {
                return Err(IntegrityError::UnknownLinkPatent {
                    inventor_id: link.inventor_id.clone(),
                    patent_id: link.patent_id.clone(),
                });
            }
            if !seen_links.insert((link.inventor_id.as_str(), link.patent_id.as_str())) {
                return Err(IntegrityError::DuplicateLink {
                    inventor_id: link.inventor_id.clone(),
                    patent_id: link.patent_id.clone(),
                });
            }
        }

        let mut seen_edges: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());
        for edge in &edges {
            check_edge(edge, &known)?;
            if !seen_edges.insert((edge.inventor_a.as_str(), edge.inventor_b.as_str())) {
                return Err(IntegrityError::DuplicateEdge { edge: edge.label() });
            }
        }

        if self.config.verify_edge_weights {
            verify_weights(&edges, &links, &skipped_patents)?;
        }

        inventors.sort_by(|a, b| a.id.cmp(&b.id));
        links.sort_by(|a, b| {
            (a.inventor_id.as_str(), a.patent_id.as_str())
                .cmp(&(b.inventor_id.as_str(), b.patent_id.as_str()))
        });
        edges.sort_by(|a, b| {
            (a.inventor_a.as_str(), a.inventor_b.as_str())
                .cmp(&(b.inventor_a.as_str(), b.inventor_b.as_str()))
        });
        patents.sort_by(|a, b| a.patent_id.cmp(&b.patent_id));

        info!(
            inventors = inventors.len(),
            links = links.len(),
            edges = edges.len(),
            patents = patents.len(),
            "network assembled"
        );

        Ok(NetworkSnapshot {
            inventors,
            links,
            edges,
            patents,
            window,
        })
    }
}

fn check_edge(edge: &CollaborationEdge, known: &HashSet<String>) -> Result<(), IntegrityError> {
    if edge.edge_weight == 0 {
        return Err(IntegrityError::NonPositiveEdgeWeight { edge: edge.label() });
    }
    if edge.inventor_a == edge.inventor_b {
        return Err(IntegrityError::SelfLoop {
            inventor_id: edge.inventor_a.clone(),
        });
    }
    if edge.inventor_a > edge.inventor_b {
        return Err(IntegrityError::NonCanonicalEdge { edge: edge.label() });
    }
    for endpoint in [&edge.inventor_a, &edge.inventor_b] {
        if !known.contains(endpoint) {
            return Err(IntegrityError::UnknownEdgeEndpoint {
                edge: edge.label(),
                inventor_id: endpoint.clone(),
            });
        }
    }
    Ok(())
}

/// Every edge weight must equal the shared-patent count recomputed from the
/// links, and every co-listed pair must have an edge.
fn verify_weights(
    edges: &[CollaborationEdge],
    links: &[InventorPatentLink],
    skipped_patents: &[String],
) -> Result<(), IntegrityError> {
    let skipped: BTreeSet<&str> = skipped_patents.iter().map(String::as_str).collect();
    let counted: Vec<InventorPatentLink> = links
        .iter()
        .filter(|l| !skipped.contains(l.patent_id.as_str()))
        .cloned()
        .collect();
    let mut truth: BTreeMap<(String, String), u32> = patnet_edges::recount_weights(&counted);

    for edge in edges {
        let key = (edge.inventor_a.clone(), edge.inventor_b.clone());
        let recomputed = truth.remove(&key).unwrap_or(0);
        if recomputed != edge.edge_weight {
            return Err(IntegrityError::EdgeWeightMismatch {
                edge: edge.label(),
                recorded: edge.edge_weight,
                recomputed,
            });
        }
    }
    if let Some(((a, b), recomputed)) = truth.into_iter().next() {
        return Err(IntegrityError::EdgeWeightMismatch {
            edge: format!("{a}--{b}"),
            recorded: 0,
            recomputed,
        });
    }
    Ok(())
}
